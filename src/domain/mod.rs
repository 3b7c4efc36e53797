// ==========================================
// 生产合规看板 - 领域模型层
// ==========================================
// 职责: 定义引擎消费/产出的只读数据结构
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod checklist;
pub mod ledger;
pub mod lifecycle;
pub mod overview;
pub mod threshold;
pub mod types;

// 重导出核心类型
pub use checklist::{ChecklistItem, ChecklistScore};
pub use ledger::{LedgerEntry, LedgerSummary};
pub use lifecycle::{CalendarDate, LifecycleRecord, StockItem};
pub use overview::{ExpiryOverview, UpcomingExpiry};
pub use threshold::{ThresholdTable, ThresholdTier};
pub use types::{BadgeKind, ExpiryBand, LedgerStatus, RecordKind, RiskLevel};
