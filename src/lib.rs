// ==========================================
// 生产合规看板 - 状态引擎核心库
// ==========================================
// 职责: 批次/原料/许可证/文件的有效期分级,
//       台账汇总,检查单评分,库存徽标判定
// 系统定位: 纯计算层 (取数与渲染由外部负责)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分级与汇总规则
pub mod engine;

// 配置层 - 阈值档案
pub mod config;

// 数据库基础设施（配置表连接初始化）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BadgeKind, CalendarDate, ChecklistItem, ChecklistScore, ExpiryBand, ExpiryOverview,
    LedgerEntry, LedgerStatus, LedgerSummary, LifecycleRecord, RecordKind, RiskLevel, StockItem,
    ThresholdTable, ThresholdTier, UpcomingExpiry,
};

// 引擎
pub use engine::{
    aggregate_ledger, classify_expiry, days_until, lifecycle_progress, score_checklist,
    select_stock_badge, select_stock_badge_with, summarize_expiry, BadgePolicy, StatusEngine,
    StockStatus,
};

// 配置
pub use config::{ConfigError, ConfigManager, StatusConfigReader, StatusSettings, ThresholdProfile};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
