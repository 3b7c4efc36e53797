// ==========================================
// 生产合规看板 - 库存徽标判定
// ==========================================
// 顺序（优先级递减,命中即返回）:
// 1) 分级为 Expired → EXPIRED
// 2) 库存 = 0 → OUT_OF_STOCK
// 3) 分级落在"即将过期"窗口 → EXPIRING_SOON
// 4) 库存 < 再订货点 → LOW_STOCK
// 5) 默认 → IN_STOCK
// 红线: 有效期条件永远优先于库存条件（缺货除外,见顺序 2）
// ==========================================

use crate::domain::types::{BadgeKind, ExpiryBand};
use serde::{Deserialize, Serialize};

/// 默认即将过期窗口（天）,与预设阈值表的 Soon 档一致
pub const DEFAULT_SOON_WITHIN_DAYS: i64 = 30;

/// "即将过期"窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgePolicy {
    /// None: 任一档位都算即将过期; Some(n): 档位内且剩余天数 <= n（默认 30）
    #[serde(default)]
    pub soon_within_days: Option<i64>,
}

impl Default for BadgePolicy {
    fn default() -> Self {
        Self::within(DEFAULT_SOON_WITHIN_DAYS)
    }
}

impl BadgePolicy {
    pub fn within(days: i64) -> Self {
        Self {
            soon_within_days: Some(days),
        }
    }

    /// 任一档位都算即将过期
    pub fn any_tier() -> Self {
        Self {
            soon_within_days: None,
        }
    }

    /// 分级是否落在即将过期窗口
    pub fn is_expiring_soon(&self, band: &ExpiryBand) -> bool {
        match band {
            ExpiryBand::Tier { days_remaining, .. } => self
                .soon_within_days
                .map_or(true, |limit| *days_remaining <= limit),
            _ => false,
        }
    }
}

/// 按默认窗口判定徽标（剩余 30 天以内算即将过期）
pub fn select_stock_badge(stock_level: f64, reorder_level: f64, band: &ExpiryBand) -> BadgeKind {
    select_stock_badge_with(stock_level, reorder_level, band, &BadgePolicy::default())
}

/// 按指定窗口判定徽标
pub fn select_stock_badge_with(
    stock_level: f64,
    reorder_level: f64,
    band: &ExpiryBand,
    policy: &BadgePolicy,
) -> BadgeKind {
    if band.is_expired() {
        return BadgeKind::Expired;
    }
    if stock_level == 0.0 {
        return BadgeKind::OutOfStock;
    }
    if policy.is_expiring_soon(band) {
        return BadgeKind::ExpiringSoon;
    }
    if stock_level < reorder_level {
        return BadgeKind::LowStock;
    }
    BadgeKind::InStock
}
