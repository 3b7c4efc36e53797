// ==========================================
// 生产合规看板 - 状态配置读取 Trait
// ==========================================
// 职责: 定义引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigError;
use crate::config::status_profile::{StatusSettings, ThresholdProfile};
use crate::domain::threshold::ThresholdTable;
use crate::engine::badge::BadgePolicy;
use async_trait::async_trait;

// ==========================================
// StatusConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait StatusConfigReader: Send + Sync {
    /// 获取指定档案的阈值表
    ///
    /// # 默认值
    /// - BATCH / INGREDIENT: 7 / 30 / 90
    /// - LICENSE / DOCUMENT: 15 / 30 / 60
    async fn get_threshold_table(
        &self,
        profile: ThresholdProfile,
    ) -> Result<ThresholdTable, ConfigError>;

    /// 获取徽标的即将过期窗口
    ///
    /// # 默认值
    /// - 未配置: 剩余 30 天以内（与 Soon 档一致）
    async fn get_badge_policy(&self) -> Result<BadgePolicy, ConfigError>;

    /// 一次性读取全部引擎参数
    async fn load_status_settings(&self) -> Result<StatusSettings, ConfigError> {
        let mut settings = StatusSettings {
            badge: self.get_badge_policy().await?,
            ..StatusSettings::default()
        };
        for profile in ThresholdProfile::ALL {
            let table = self.get_threshold_table(profile).await?;
            settings.set_table(profile, table);
        }
        Ok(settings)
    }
}
