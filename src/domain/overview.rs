// ==========================================
// 生产合规看板 - 有效期总览
// ==========================================
// 职责: 一组记录按有效期分级后的计数快照
// ==========================================

use crate::domain::types::RiskLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 最近到期的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingExpiry {
    pub record_id: String,
    pub expiry_date: NaiveDate,
    pub days_remaining: i64,
}

/// 有效期总览
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryOverview {
    pub total_count: usize,
    pub expired_count: usize,
    /// 各档位计数（key = 档位标签）
    pub tier_counts: BTreeMap<String, usize>,
    pub healthy_count: usize,
    pub no_expiry_count: usize,
    /// 未过期记录中最早到期的一条
    pub next_expiry: Option<UpcomingExpiry>,
    /// 所有记录中最高的风险等级
    pub overall_risk: RiskLevel,
}

impl Default for ExpiryOverview {
    fn default() -> Self {
        Self {
            total_count: 0,
            expired_count: 0,
            tier_counts: BTreeMap::new(),
            healthy_count: 0,
            no_expiry_count: 0,
            next_expiry: None,
            overall_risk: RiskLevel::Green,
        }
    }
}
