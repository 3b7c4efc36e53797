// ==========================================
// 生产合规看板 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 引擎本身不产生错误,错误只来自配置读写
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 数据库错误 =====
    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(#[from] rusqlite::Error),

    // ===== 格式错误 =====
    #[error("配置序列化失败: {0}")]
    SerializationError(#[from] serde_json::Error),

    // ===== 数据质量错误 =====
    #[error("阈值表无效 (key={key}): {message}")]
    InvalidThresholdTable { key: String, message: String },

    #[error("配置值无效 (key={key}): {value}")]
    InvalidValue { key: String, value: String },
}

impl<T> From<std::sync::PoisonError<T>> for ConfigError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        ConfigError::LockError(err.to_string())
    }
}
