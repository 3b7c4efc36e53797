// ==========================================
// 生产合规看板 - 合规检查单
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 检查项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub completed: bool,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

/// 检查单得分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistScore {
    /// 完成率（四舍五入到整数百分比）
    pub percent: u32,
    pub completed_count: usize,
    pub total_count: usize,
    /// 已完成项中最近一次核验时间
    pub last_verified_at: Option<DateTime<Utc>>,
}
