// ==========================================
// 生产合规看板 - 状态引擎门面
// ==========================================
// 职责: 持有阈值档案与徽标窗口,为各视图提供统一入口
// 输入: 调用方传入的只读快照
// 输出: 分级 / 徽标 / 汇总结果
// 红线: 无状态计算,不做缓存,不访问数据库
// ==========================================

use crate::config::status_profile::{StatusSettings, ThresholdProfile};
use crate::domain::checklist::{ChecklistItem, ChecklistScore};
use crate::domain::ledger::{LedgerEntry, LedgerSummary};
use crate::domain::lifecycle::{CalendarDate, LifecycleRecord, StockItem};
use crate::domain::overview::ExpiryOverview;
use crate::domain::types::{BadgeKind, ExpiryBand};
use crate::engine::{badge, checklist, expiry, ledger};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 单个库存条目的判定结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockStatus {
    pub item_id: String,
    pub band: ExpiryBand,
    pub badge: BadgeKind,
}

// ==========================================
// StatusEngine - 状态引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StatusEngine {
    settings: StatusSettings,
}

impl StatusEngine {
    /// 使用预设阈值创建引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定参数创建引擎（通常来自 StatusConfigReader::load_status_settings）
    pub fn with_settings(settings: StatusSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &StatusSettings {
        &self.settings
    }

    // ==========================================
    // 单条判定
    // ==========================================

    /// 按档案阈值做有效期分级
    pub fn classify<T: CalendarDate, E: CalendarDate>(
        &self,
        profile: ThresholdProfile,
        today: T,
        expiry_date: Option<E>,
    ) -> ExpiryBand {
        expiry::classify_expiry(today, expiry_date, self.settings.table_for(profile))
    }

    /// 按配置的即将过期窗口判定徽标
    pub fn select_badge(&self, stock_level: f64, reorder_level: f64, band: &ExpiryBand) -> BadgeKind {
        badge::select_stock_badge_with(stock_level, reorder_level, band, &self.settings.badge)
    }

    // ==========================================
    // 批量判定
    // ==========================================

    /// 批量判定库存状态（批次库存、原料库存）
    ///
    /// 返回顺序与输入一致
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub fn evaluate_stock(
        &self,
        profile: ThresholdProfile,
        items: &[StockItem],
        today: NaiveDate,
    ) -> Vec<StockStatus> {
        let statuses: Vec<StockStatus> = items
            .iter()
            .map(|item| {
                let band = self.classify(profile, today, item.expiry_date);
                let badge = self.select_badge(item.stock_level, item.reorder_level, &band);
                StockStatus {
                    item_id: item.item_id.clone(),
                    band,
                    badge,
                }
            })
            .collect();

        let flagged = statuses
            .iter()
            .filter(|s| s.badge != BadgeKind::InStock)
            .count();
        tracing::debug!(flagged, "库存徽标判定完成");

        statuses
    }

    /// 一组记录的有效期总览（许可证、合规文件等）
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn summarize(
        &self,
        profile: ThresholdProfile,
        records: &[LifecycleRecord],
        today: NaiveDate,
    ) -> ExpiryOverview {
        let overview = expiry::summarize_expiry(records, today, self.settings.table_for(profile));
        tracing::debug!(
            expired = overview.expired_count,
            overall_risk = %overview.overall_risk,
            "有效期总览完成"
        );
        overview
    }

    // ==========================================
    // 汇总
    // ==========================================

    #[instrument(skip(self, entries), fields(count = entries.len()))]
    pub fn aggregate_ledger(&self, entries: &[LedgerEntry]) -> LedgerSummary {
        let summary = ledger::aggregate_ledger(entries);
        tracing::debug!(
            total_quantity = summary.total_quantity,
            waste_quantity = summary.waste_quantity,
            utilization_rate = summary.utilization_rate,
            "台账汇总完成"
        );
        summary
    }

    pub fn score_checklist(&self, items: &[ChecklistItem]) -> ChecklistScore {
        checklist::score_checklist(items)
    }
}
