// ==========================================
// 生产合规看板 - 台账汇总引擎
// ==========================================
// 输入: 台账条目快照（库存批次/采购/领用）
// 输出: LedgerSummary
// 红线: 结果与条目顺序无关（逐位一致）
//       求和先收集加数,按 total_cmp 排序后再累加
// ==========================================

use crate::domain::ledger::{LedgerEntry, LedgerSummary};
use crate::domain::types::LedgerStatus;

/// 汇总台账
///
/// 规则:
/// - total_cost = Σ quantity * cost_per_unit（缺省单价按 0）
/// - waste_* 只统计 EXPIRED 条目
/// - utilization_rate = Σ(USED 数量) / total_quantity * 100,分母为 0 时返回 0
/// - 单价均值/最小/最大只统计单价 > 0 的条目,没有则为 0
///
/// 负数量等异常数据原样参与计算,不做校验。
pub fn aggregate_ledger(entries: &[LedgerEntry]) -> LedgerSummary {
    let mut total_quantity = SortedSum::with_capacity(entries.len());
    let mut total_cost = SortedSum::with_capacity(entries.len());
    let mut consumed_quantity = SortedSum::default();
    let mut waste_quantity = SortedSum::default();
    let mut waste_cost = SortedSum::default();
    let mut priced = SortedSum::default();
    let mut min_cost = f64::INFINITY;
    let mut max_cost = f64::NEG_INFINITY;

    for entry in entries {
        let line_cost = entry.line_cost();
        total_quantity.push(entry.quantity);
        total_cost.push(line_cost);

        match entry.status {
            LedgerStatus::Used => consumed_quantity.push(entry.quantity),
            LedgerStatus::Expired => {
                waste_quantity.push(entry.quantity);
                waste_cost.push(line_cost);
            }
            LedgerStatus::Active => {}
        }

        if let Some(cost) = entry.cost_per_unit.filter(|c| *c > 0.0) {
            priced.push(cost);
            min_cost = min_cost.min(cost);
            max_cost = max_cost.max(cost);
        }
    }

    let mut summary = LedgerSummary {
        entry_count: entries.len(),
        total_quantity: total_quantity.total(),
        total_cost: total_cost.total(),
        consumed_quantity: consumed_quantity.total(),
        waste_quantity: waste_quantity.total(),
        waste_cost: waste_cost.total(),
        ..LedgerSummary::default()
    };

    let priced_count = priced.len();
    if priced_count > 0 {
        summary.average_unit_cost = priced.total() / priced_count as f64;
        summary.min_unit_cost = min_cost;
        summary.max_unit_cost = max_cost;
    }

    summary.utilization_rate = utilization_rate(summary.consumed_quantity, summary.total_quantity);

    summary
}

/// 与顺序无关的浮点求和
///
/// 先收集加数,按 `f64::total_cmp` 排序后依次累加,
/// 同一组加数无论以何种顺序传入,结果逐位相同。
#[derive(Debug, Default)]
struct SortedSum {
    values: Vec<f64>,
}

impl SortedSum {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn total(mut self) -> f64 {
        self.values.sort_by(f64::total_cmp);
        self.values.iter().fold(0.0, |acc, v| acc + v)
    }
}

/// 利用率 (%)，分母为 0 返回 0
pub fn utilization_rate(consumed: f64, acquired: f64) -> f64 {
    if acquired == 0.0 {
        return 0.0;
    }
    consumed * 100.0 / acquired
}
