// ==========================================
// 生产合规看板 - 阈值档案
// ==========================================
// 各视图使用的阈值表不同: 库存类 7/30/90,证照类 15/30/60
// 存储位置: config_kv（key='expiry_thresholds/{profile}'）
// ==========================================

use crate::domain::threshold::ThresholdTable;
use crate::engine::badge::BadgePolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 阈值档案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdProfile {
    Batch,      // 批次库存
    Ingredient, // 原料库存
    License,    // 许可证续期
    Document,   // 合规文件
}

impl ThresholdProfile {
    pub const ALL: [ThresholdProfile; 4] = [
        ThresholdProfile::Batch,
        ThresholdProfile::Ingredient,
        ThresholdProfile::License,
        ThresholdProfile::Document,
    ];

    /// config_kv 中的键后缀
    pub fn key_suffix(&self) -> &'static str {
        match self {
            ThresholdProfile::Batch => "batch",
            ThresholdProfile::Ingredient => "ingredient",
            ThresholdProfile::License => "license",
            ThresholdProfile::Document => "document",
        }
    }

    /// 未配置时的预设阈值表
    pub fn default_table(&self) -> ThresholdTable {
        match self {
            ThresholdProfile::Batch | ThresholdProfile::Ingredient => ThresholdTable::inventory(),
            ThresholdProfile::License | ThresholdProfile::Document => ThresholdTable::license(),
        }
    }
}

impl fmt::Display for ThresholdProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdProfile::Batch => write!(f, "BATCH"),
            ThresholdProfile::Ingredient => write!(f, "INGREDIENT"),
            ThresholdProfile::License => write!(f, "LICENSE"),
            ThresholdProfile::Document => write!(f, "DOCUMENT"),
        }
    }
}

/// 引擎运行参数（全部档案 + 徽标窗口）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSettings {
    pub batch: ThresholdTable,
    pub ingredient: ThresholdTable,
    pub license: ThresholdTable,
    pub document: ThresholdTable,
    #[serde(default)]
    pub badge: BadgePolicy,
}

impl StatusSettings {
    pub fn table_for(&self, profile: ThresholdProfile) -> &ThresholdTable {
        match profile {
            ThresholdProfile::Batch => &self.batch,
            ThresholdProfile::Ingredient => &self.ingredient,
            ThresholdProfile::License => &self.license,
            ThresholdProfile::Document => &self.document,
        }
    }

    pub fn set_table(&mut self, profile: ThresholdProfile, table: ThresholdTable) {
        match profile {
            ThresholdProfile::Batch => self.batch = table,
            ThresholdProfile::Ingredient => self.ingredient = table,
            ThresholdProfile::License => self.license = table,
            ThresholdProfile::Document => self.document = table,
        }
    }
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            batch: ThresholdProfile::Batch.default_table(),
            ingredient: ThresholdProfile::Ingredient.default_table(),
            license: ThresholdProfile::License.default_table(),
            document: ThresholdProfile::Document.default_table(),
            badge: BadgePolicy::default(),
        }
    }
}
