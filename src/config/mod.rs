// ==========================================
// 生产合规看板 - 配置层
// ==========================================
// 职责: 阈值表与徽标窗口配置,未配置时回落到预设
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod error;
pub mod status_config_trait;
pub mod status_profile;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use error::ConfigError;
pub use status_config_trait::StatusConfigReader;
pub use status_profile::{StatusSettings, ThresholdProfile};
