// ==========================================
// 生产合规看板 - 数量台账
// ==========================================
// 职责: 库存批次/采购/领用记录与其汇总结果
// ==========================================

use crate::domain::types::LedgerStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 台账条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub quantity: f64,
    pub unit: String,
    /// 单价（可缺省）
    #[serde(default)]
    pub cost_per_unit: Option<f64>,
    pub status: LedgerStatus,
    pub timestamp: DateTime<Utc>,
}

impl LedgerEntry {
    /// 条目金额（缺省单价按 0 计）
    pub fn line_cost(&self) -> f64 {
        self.quantity * self.cost_per_unit.unwrap_or(0.0)
    }
}

/// 台账汇总
///
/// 空台账汇总为全 0（见 `Default`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub entry_count: usize,
    pub total_quantity: f64,
    pub total_cost: f64,
    /// 单价均值（仅统计单价 > 0 的条目）
    pub average_unit_cost: f64,
    pub min_unit_cost: f64,
    pub max_unit_cost: f64,
    /// 已消耗数量 (status = USED)
    pub consumed_quantity: f64,
    /// 报废数量 (status = EXPIRED)
    pub waste_quantity: f64,
    pub waste_cost: f64,
    /// 利用率 (%) = 已消耗 / 总入账 * 100
    pub utilization_rate: f64,
}
