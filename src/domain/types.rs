// ==========================================
// 生产合规看板 - 领域类型定义
// ==========================================
// 有效期分级、库存徽标、台账状态、风险颜色
// 红线: 有效期分级是"等级制",阈值由调用方给出
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 记录类别 (Record Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    Batch,      // 生产批次
    Ingredient, // 原料
    License,    // 许可证
    Document,   // 合规文件
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Batch => write!(f, "BATCH"),
            RecordKind::Ingredient => write!(f, "INGREDIENT"),
            RecordKind::License => write!(f, "LICENSE"),
            RecordKind::Document => write!(f, "DOCUMENT"),
        }
    }
}

// ==========================================
// 有效期分级 (Expiry Band)
// ==========================================
// Tier 的 rank 为阈值表中的下标(0 = 最紧迫)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "band", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryBand {
    /// 无有效期
    NoExpiry,
    /// 已过期
    Expired { days_overdue: i64 },
    /// 命中阈值表中的某一档
    Tier {
        rank: usize,
        label: String,
        max_days: i64,
        days_remaining: i64,
    },
    /// 超出所有阈值
    Healthy { days_remaining: i64 },
}

impl ExpiryBand {
    /// 剩余天数（已过期为负数，无有效期为 None）
    pub fn days_remaining(&self) -> Option<i64> {
        match self {
            ExpiryBand::NoExpiry => None,
            ExpiryBand::Expired { days_overdue } => Some(-days_overdue),
            ExpiryBand::Tier { days_remaining, .. } => Some(*days_remaining),
            ExpiryBand::Healthy { days_remaining } => Some(*days_remaining),
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, ExpiryBand::Expired { .. })
    }

    /// 四色风险映射
    ///
    /// - Expired → RED
    /// - 第一档 (rank=0) → ORANGE
    /// - 其余档 → YELLOW
    /// - Healthy / NoExpiry → GREEN
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            ExpiryBand::Expired { .. } => RiskLevel::Red,
            ExpiryBand::Tier { rank: 0, .. } => RiskLevel::Orange,
            ExpiryBand::Tier { .. } => RiskLevel::Yellow,
            ExpiryBand::Healthy { .. } | ExpiryBand::NoExpiry => RiskLevel::Green,
        }
    }

    /// 显示标签（Tier 使用阈值表中的标签,其余走 i18n）
    pub fn display_label(&self) -> String {
        match self {
            ExpiryBand::NoExpiry => crate::i18n::t("band.no_expiry"),
            ExpiryBand::Expired { .. } => crate::i18n::t("band.expired"),
            ExpiryBand::Tier { label, .. } => label.clone(),
            ExpiryBand::Healthy { .. } => crate::i18n::t("band.healthy"),
        }
    }

    /// 倒计时文案（许可证续期、文件到期提示）
    pub fn countdown_text(&self) -> String {
        match self.days_remaining() {
            None => crate::i18n::t("band.no_expiry"),
            Some(days) if days < 0 => {
                let overdue = (-days).to_string();
                crate::i18n::t_with_args("countdown.overdue", &[("days", overdue.as_str())])
            }
            Some(days) => {
                let remaining = days.to_string();
                crate::i18n::t_with_args("countdown.remaining", &[("days", remaining.as_str())])
            }
        }
    }
}

impl fmt::Display for ExpiryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryBand::NoExpiry => write!(f, "NO_EXPIRY"),
            ExpiryBand::Expired { days_overdue } => write!(f, "EXPIRED({}d)", days_overdue),
            ExpiryBand::Tier {
                label,
                days_remaining,
                ..
            } => write!(f, "{}({}d)", label, days_remaining),
            ExpiryBand::Healthy { days_remaining } => write!(f, "HEALTHY({}d)", days_remaining),
        }
    }
}

// ==========================================
// 库存徽标 (Stock Badge)
// ==========================================
// 判定顺序见 engine::badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeKind {
    Expired,      // 已过期
    OutOfStock,   // 缺货
    ExpiringSoon, // 即将过期
    LowStock,     // 低库存
    InStock,      // 正常
}

impl BadgeKind {
    pub fn label_key(&self) -> &'static str {
        match self {
            BadgeKind::Expired => "badge.expired",
            BadgeKind::OutOfStock => "badge.out_of_stock",
            BadgeKind::ExpiringSoon => "badge.expiring_soon",
            BadgeKind::LowStock => "badge.low_stock",
            BadgeKind::InStock => "badge.in_stock",
        }
    }

    pub fn display_label(&self) -> String {
        crate::i18n::t(self.label_key())
    }
}

impl fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeKind::Expired => write!(f, "EXPIRED"),
            BadgeKind::OutOfStock => write!(f, "OUT_OF_STOCK"),
            BadgeKind::ExpiringSoon => write!(f, "EXPIRING_SOON"),
            BadgeKind::LowStock => write!(f, "LOW_STOCK"),
            BadgeKind::InStock => write!(f, "IN_STOCK"),
        }
    }
}

// ==========================================
// 台账状态 (Ledger Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerStatus {
    Active,  // 在库
    Used,    // 已消耗
    Expired, // 过期报废
}

impl LedgerStatus {
    pub fn display_label(&self) -> String {
        match self {
            LedgerStatus::Active => crate::i18n::t("ledger.active"),
            LedgerStatus::Used => crate::i18n::t("ledger.used"),
            LedgerStatus::Expired => crate::i18n::t("ledger.expired"),
        }
    }
}

impl fmt::Display for LedgerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerStatus::Active => write!(f, "ACTIVE"),
            LedgerStatus::Used => write!(f, "USED"),
            LedgerStatus::Expired => write!(f, "EXPIRED"),
        }
    }
}

// ==========================================
// 风险等级 (Risk Level)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Green,  // 正常
    Yellow, // 关注
    Orange, // 紧张
    Red,    // 危险
}

impl RiskLevel {
    pub fn display_label(&self) -> String {
        match self {
            RiskLevel::Green => crate::i18n::t("risk.green"),
            RiskLevel::Yellow => crate::i18n::t("risk.yellow"),
            RiskLevel::Orange => crate::i18n::t("risk.orange"),
            RiskLevel::Red => crate::i18n::t("risk.red"),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Green => write!(f, "GREEN"),
            RiskLevel::Yellow => write!(f, "YELLOW"),
            RiskLevel::Orange => write!(f, "ORANGE"),
            RiskLevel::Red => write!(f, "RED"),
        }
    }
}
