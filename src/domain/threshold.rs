// ==========================================
// 生产合规看板 - 有效期阈值表
// ==========================================
// 职责: 定义 (天数, 标签) 阈值档位,按天数升序保存
// 预设: 库存 7/30/90, 许可证 15/30/60
// ==========================================

use serde::{Deserialize, Serialize};

/// 单个阈值档位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTier {
    /// 剩余天数上限（含）
    pub max_days: i64,
    pub label: String,
}

impl ThresholdTier {
    pub fn new(max_days: i64, label: impl Into<String>) -> Self {
        Self {
            max_days,
            label: label.into(),
        }
    }
}

/// 阈值表
///
/// 构造时按 `max_days` 稳定排序,调用方传入顺序不影响分级结果。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ThresholdTier>", into = "Vec<ThresholdTier>")]
pub struct ThresholdTable {
    tiers: Vec<ThresholdTier>,
}

impl ThresholdTable {
    pub fn new(mut tiers: Vec<ThresholdTier>) -> Self {
        tiers.sort_by_key(|tier| tier.max_days);
        Self { tiers }
    }

    /// 由 (天数, 标签) 列表构造
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (i64, S)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(days, label)| ThresholdTier::new(days, label))
                .collect(),
        )
    }

    /// 库存预设: 7 / 30 / 90
    pub fn inventory() -> Self {
        Self::from_pairs([(7, "Critical"), (30, "Soon"), (90, "Warning")])
    }

    /// 许可证预设: 15 / 30 / 60
    pub fn license() -> Self {
        Self::from_pairs([(15, "Critical"), (30, "Soon"), (60, "Warning")])
    }

    pub fn tiers(&self) -> &[ThresholdTier] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }
}

impl From<Vec<ThresholdTier>> for ThresholdTable {
    fn from(tiers: Vec<ThresholdTier>) -> Self {
        Self::new(tiers)
    }
}

impl From<ThresholdTable> for Vec<ThresholdTier> {
    fn from(table: ThresholdTable) -> Self {
        table.tiers
    }
}
