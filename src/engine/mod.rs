// ==========================================
// 生产合规看板 - 引擎层
// ==========================================
// 职责: 有效期分级、台账汇总、检查单评分、库存徽标
// 红线: 纯函数,不访问数据库,不持有可变共享状态
// ==========================================

pub mod badge;
pub mod checklist;
pub mod expiry;
pub mod ledger;
pub mod status_engine;

// 重导出核心函数
pub use badge::{select_stock_badge, select_stock_badge_with, BadgePolicy};
pub use checklist::score_checklist;
pub use expiry::{classify_expiry, days_until, lifecycle_progress, summarize_expiry};
pub use ledger::{aggregate_ledger, utilization_rate};
pub use status_engine::{StatusEngine, StockStatus};
