// ==========================================
// 生产合规看板 - 配置管理器
// ==========================================
// 职责: 阈值表/徽标窗口的加载、查询、覆写
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::error::ConfigError;
use crate::config::status_config_trait::StatusConfigReader;
use crate::config::status_profile::ThresholdProfile;
use crate::db::{ensure_config_schema, open_sqlite_connection};
use crate::domain::threshold::ThresholdTable;
use crate::engine::badge::BadgePolicy;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

const GLOBAL_SCOPE: &str = "global";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（不存在 config_kv 表时自动建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, ConfigError> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：会对传入连接再次应用统一 PRAGMA 与建表（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, ConfigError> {
        {
            let conn_guard = conn.lock()?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
            ensure_config_schema(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    fn get_config_value(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let conn = self.conn.lock()?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![GLOBAL_SCOPE, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 读取 global scope 的配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.get_config_value(key)
    }

    /// 写入配置值（存在则覆盖）
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let conn = self.conn.lock()?;
        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value, updated_at)
            VALUES (?1, ?2, ?3, datetime('now'))
            ON CONFLICT(scope_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![GLOBAL_SCOPE, key, value],
        )?;
        Ok(())
    }

    /// 删除配置值（回落到预设）
    pub fn remove_config_value(&self, key: &str) -> Result<bool, ConfigError> {
        let conn = self.conn.lock()?;
        let affected = conn.execute(
            "DELETE FROM config_kv WHERE scope_id = ?1 AND key = ?2",
            params![GLOBAL_SCOPE, key],
        )?;
        Ok(affected > 0)
    }

    /// 覆写指定档案的阈值表
    ///
    /// 写入前校验: 不能为空,天数不能为负
    pub fn set_threshold_table(
        &self,
        profile: ThresholdProfile,
        table: &ThresholdTable,
    ) -> Result<(), ConfigError> {
        let key = config_keys::threshold_key(profile);
        validate_threshold_table(&key, table)?;

        let value = serde_json::to_string(table)?;
        self.set_config_value(&key, &value)?;

        tracing::info!(
            config_key = %key,
            tiers = table.len(),
            "阈值表已更新"
        );
        Ok(())
    }

    /// 设置徽标即将过期窗口（None = 删除配置,回落默认 30 天）
    pub fn set_badge_soon_within_days(&self, days: Option<i64>) -> Result<(), ConfigError> {
        match days {
            Some(d) if d < 0 => Err(ConfigError::InvalidValue {
                key: config_keys::BADGE_SOON_WITHIN_DAYS.to_string(),
                value: d.to_string(),
            }),
            Some(d) => self.set_config_value(config_keys::BADGE_SOON_WITHIN_DAYS, &d.to_string()),
            None => self
                .remove_config_value(config_keys::BADGE_SOON_WITHIN_DAYS)
                .map(|_| ()),
        }
    }

    /// 获取所有配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 看板导出时记录当时生效的阈值
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        let conn = self.conn.lock()?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = ?1 ORDER BY key")?;
        let rows = stmt.query_map(params![GLOBAL_SCOPE], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&config_map)?)
    }

    /// 从配置快照恢复配置
    ///
    /// 先逐项校验,全部通过后在同一事务内写入;任一项失败则不落库。
    ///
    /// # 返回
    /// - 恢复的配置项数量
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> Result<usize, ConfigError> {
        let config_map: BTreeMap<String, String> = serde_json::from_str(snapshot_json)?;

        for (key, value) in &config_map {
            validate_snapshot_entry(key, value)?;
        }

        let mut conn = self.conn.lock()?;
        let tx = conn.transaction()?;
        for (key, value) in &config_map {
            tx.execute(
                r#"
                INSERT INTO config_kv (scope_id, key, value, updated_at)
                VALUES (?1, ?2, ?3, datetime('now'))
                ON CONFLICT(scope_id, key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![GLOBAL_SCOPE, key, value],
            )?;
        }
        tx.commit()?;

        tracing::info!(restored = config_map.len(), "配置快照已恢复");
        Ok(config_map.len())
    }
}

/// 快照条目校验: 阈值表与徽标窗口按写入接口的规则检查,其他键原样恢复
fn validate_snapshot_entry(key: &str, value: &str) -> Result<(), ConfigError> {
    if key.split_once('/').map(|(prefix, _)| prefix) == Some(config_keys::EXPIRY_THRESHOLDS_PREFIX) {
        let table: ThresholdTable =
            serde_json::from_str(value).map_err(|e| ConfigError::InvalidThresholdTable {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        return validate_threshold_table(key, &table);
    }

    if key == config_keys::BADGE_SOON_WITHIN_DAYS {
        return match value.trim().parse::<i64>() {
            Ok(days) if days >= 0 => Ok(()),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
        };
    }

    Ok(())
}

fn validate_threshold_table(key: &str, table: &ThresholdTable) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(ConfigError::InvalidThresholdTable {
            key: key.to_string(),
            message: "阈值表为空".to_string(),
        });
    }
    if let Some(tier) = table.tiers().iter().find(|tier| tier.max_days < 0) {
        return Err(ConfigError::InvalidThresholdTable {
            key: key.to_string(),
            message: format!("档位 {} 的天数为负: {}", tier.label, tier.max_days),
        });
    }
    Ok(())
}

// ==========================================
// StatusConfigReader Trait 实现
// ==========================================
#[async_trait]
impl StatusConfigReader for ConfigManager {
    async fn get_threshold_table(
        &self,
        profile: ThresholdProfile,
    ) -> Result<ThresholdTable, ConfigError> {
        let key = config_keys::threshold_key(profile);
        let raw = match self.get_config_value(&key)? {
            Some(v) => v,
            None => return Ok(profile.default_table()),
        };

        match serde_json::from_str::<ThresholdTable>(&raw) {
            Ok(table) if !table.is_empty() => Ok(table),
            Ok(_) => {
                tracing::warn!(config_key = %key, "阈值表为空，使用预设");
                Ok(profile.default_table())
            }
            Err(e) => {
                tracing::warn!(
                    config_key = %key,
                    raw_value = %raw,
                    error = %e,
                    "阈值表格式错误，使用预设"
                );
                Ok(profile.default_table())
            }
        }
    }

    async fn get_badge_policy(&self) -> Result<BadgePolicy, ConfigError> {
        let raw = match self.get_config_value(config_keys::BADGE_SOON_WITHIN_DAYS)? {
            Some(v) => v,
            None => return Ok(BadgePolicy::default()),
        };

        match raw.trim().parse::<i64>() {
            Ok(days) if days >= 0 => Ok(BadgePolicy::within(days)),
            _ => {
                tracing::warn!(
                    config_key = config_keys::BADGE_SOON_WITHIN_DAYS,
                    raw_value = %raw,
                    "徽标窗口配置无效，使用默认"
                );
                Ok(BadgePolicy::default())
            }
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    use crate::config::status_profile::ThresholdProfile;

    // 阈值表 (JSON): expiry_thresholds/{profile}
    pub const EXPIRY_THRESHOLDS_PREFIX: &str = "expiry_thresholds";

    // 徽标即将过期窗口（天）
    pub const BADGE_SOON_WITHIN_DAYS: &str = "badge_soon_within_days";

    pub fn threshold_key(profile: ThresholdProfile) -> String {
        format!("{}/{}", EXPIRY_THRESHOLDS_PREFIX, profile.key_suffix())
    }
}
