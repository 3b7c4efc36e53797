// ==========================================
// 生产合规看板 - 有效期分级引擎
// ==========================================
// 红线: 分级是"等级制",阈值表由调用方提供,引擎不写死天数
// 输入: 今日 + 有效期 + 阈值表
// 输出: ExpiryBand
// ==========================================
// 天数差 = 日历日相减,不按秒数折算
// ==========================================

use crate::domain::lifecycle::{CalendarDate, LifecycleRecord};
use crate::domain::overview::{ExpiryOverview, UpcomingExpiry};
use crate::domain::threshold::ThresholdTable;
use crate::domain::types::ExpiryBand;

/// 距到期的日历天数（已过期为负）
///
/// 许可证续期倒计时直接使用本函数
/// 今日与有效期都只取日历日,可混用 NaiveDate / NaiveDateTime / DateTime
pub fn days_until<T: CalendarDate, E: CalendarDate>(today: T, expiry: Option<E>) -> Option<i64> {
    expiry.map(|date| (date.calendar_date() - today.calendar_date()).num_days())
}

/// 有效期分级
///
/// 顺序（命中即返回）:
/// 1) 无有效期 → NoExpiry
/// 2) 剩余天数 < 0 → Expired
/// 3) 阈值表升序第一个 max_days >= 剩余天数 的档位 → Tier
/// 4) 其他 → Healthy
///
/// 当天到期（剩余 0 天）不算过期,落入第一档。
pub fn classify_expiry<T: CalendarDate, E: CalendarDate>(
    today: T,
    expiry: Option<E>,
    thresholds: &ThresholdTable,
) -> ExpiryBand {
    let days_remaining = match days_until(today, expiry) {
        Some(days) => days,
        None => return ExpiryBand::NoExpiry,
    };

    if days_remaining < 0 {
        return ExpiryBand::Expired {
            days_overdue: -days_remaining,
        };
    }

    thresholds
        .tiers()
        .iter()
        .enumerate()
        .find(|(_, tier)| days_remaining <= tier.max_days)
        .map(|(rank, tier)| ExpiryBand::Tier {
            rank,
            label: tier.label.clone(),
            max_days: tier.max_days,
            days_remaining,
        })
        .unwrap_or(ExpiryBand::Healthy { days_remaining })
}

/// 有效期已消耗比例 (%)
///
/// - 无有效期 → None
/// - 有效期跨度 <= 0（数据异常或当日到期）→ 100
/// - 不做截断: 参考日之前为负,过期之后超过 100
pub fn lifecycle_progress<T: CalendarDate>(record: &LifecycleRecord, today: T) -> Option<f64> {
    let expiry = record.expiry_date?;
    let span = (expiry - record.reference_date).num_days();
    if span <= 0 {
        return Some(100.0);
    }
    let elapsed = (today.calendar_date() - record.reference_date).num_days();
    Some(elapsed as f64 * 100.0 / span as f64)
}

/// 一组记录的有效期总览
///
/// 结果与记录顺序无关: 最近到期记录在天数相同时按 record_id 取最小者。
pub fn summarize_expiry<T: CalendarDate>(
    records: &[LifecycleRecord],
    today: T,
    thresholds: &ThresholdTable,
) -> ExpiryOverview {
    let today = today.calendar_date();
    let mut overview = ExpiryOverview {
        total_count: records.len(),
        ..ExpiryOverview::default()
    };

    for record in records {
        let band = classify_expiry(today, record.expiry_date, thresholds);
        overview.overall_risk = overview.overall_risk.max(band.risk_level());

        match &band {
            ExpiryBand::NoExpiry => overview.no_expiry_count += 1,
            ExpiryBand::Expired { .. } => overview.expired_count += 1,
            ExpiryBand::Tier { label, .. } => {
                *overview.tier_counts.entry(label.clone()).or_insert(0) += 1;
            }
            ExpiryBand::Healthy { .. } => overview.healthy_count += 1,
        }

        if let (Some(expiry_date), Some(days_remaining)) = (record.expiry_date, band.days_remaining())
        {
            if days_remaining < 0 {
                continue;
            }
            let closer = match &overview.next_expiry {
                None => true,
                Some(current) => {
                    (days_remaining, record.record_id.as_str())
                        < (current.days_remaining, current.record_id.as_str())
                }
            };
            if closer {
                overview.next_expiry = Some(UpcomingExpiry {
                    record_id: record.record_id.clone(),
                    expiry_date,
                    days_remaining,
                });
            }
        }
    }

    overview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{RecordKind, RiskLevel};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    // ==========================================
    // 测试数据准备
    // ==========================================

    /// 基准日期: 2026-03-10
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn in_days(days: i64) -> Option<NaiveDate> {
        Some(today() + Duration::days(days))
    }

    fn record(id: &str, expiry: Option<NaiveDate>) -> LifecycleRecord {
        LifecycleRecord {
            record_id: id.to_string(),
            name: format!("record {}", id),
            kind: RecordKind::Document,
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            expiry_date: expiry,
        }
    }

    fn label_of(band: &ExpiryBand) -> &str {
        match band {
            ExpiryBand::Tier { label, .. } => label.as_str(),
            _ => "",
        }
    }

    // ==========================================
    // classify_expiry
    // ==========================================

    #[test]
    fn test_no_expiry() {
        let band = classify_expiry(today(), None::<NaiveDate>, &ThresholdTable::inventory());
        assert_eq!(band, ExpiryBand::NoExpiry);
    }

    #[test]
    fn test_expired() {
        let band = classify_expiry(today(), in_days(-3), &ThresholdTable::inventory());
        assert_eq!(band, ExpiryBand::Expired { days_overdue: 3 });
    }

    #[test]
    fn test_expires_today_lands_in_first_tier() {
        let band = classify_expiry(today(), in_days(0), &ThresholdTable::inventory());
        assert_eq!(label_of(&band), "Critical");
        assert_eq!(band.days_remaining(), Some(0));
    }

    #[test]
    fn test_tier_boundaries_inclusive() {
        let table = ThresholdTable::license();
        assert_eq!(label_of(&classify_expiry(today(), in_days(15), &table)), "Critical");
        assert_eq!(label_of(&classify_expiry(today(), in_days(16), &table)), "Soon");
        assert_eq!(label_of(&classify_expiry(today(), in_days(30), &table)), "Soon");
        assert_eq!(label_of(&classify_expiry(today(), in_days(60), &table)), "Warning");
        assert_eq!(
            classify_expiry(today(), in_days(61), &table),
            ExpiryBand::Healthy { days_remaining: 61 }
        );
    }

    #[test]
    fn test_smallest_threshold_at_least_n() {
        let table = ThresholdTable::inventory();
        for n in 0..=90 {
            let band = classify_expiry(today(), in_days(n), &table);
            let expected = table
                .tiers()
                .iter()
                .find(|tier| tier.max_days >= n)
                .map(|tier| tier.max_days);
            match band {
                ExpiryBand::Tier { max_days, .. } => assert_eq!(Some(max_days), expected),
                other => panic!("n={} 应命中档位, 实际 {:?}", n, other),
            }
        }
    }

    #[test]
    fn test_empty_table_is_healthy() {
        let band = classify_expiry(today(), in_days(1), &ThresholdTable::default());
        assert_eq!(band, ExpiryBand::Healthy { days_remaining: 1 });
    }

    #[test]
    fn test_time_of_day_ignored() {
        // 23:59 与次日 00:01 只差两分钟,但日历上差一天
        let now = NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let band = classify_expiry(
            now,
            Some(NaiveDate::from_ymd_opt(2026, 3, 11).unwrap()),
            &ThresholdTable::inventory(),
        );
        assert_eq!(band.days_remaining(), Some(1));

        let utc_now = Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 1).unwrap();
        assert_eq!(days_until(utc_now, in_days(0)), Some(0));
    }

    #[test]
    fn test_expiry_timestamp_uses_calendar_day() {
        // 到期时间是次日 00:01,与 23:59 的今日只差两分钟,仍算剩余 1 天
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 23, 59, 0).unwrap();
        let expiry = Utc.with_ymd_and_hms(2026, 3, 11, 0, 1, 0).unwrap();
        assert_eq!(days_until(now, Some(expiry)), Some(1));

        let band = classify_expiry(now, Some(expiry), &ThresholdTable::inventory());
        assert_eq!(band.days_remaining(), Some(1));
        assert_eq!(label_of(&band), "Critical");

        // 今日与到期时间可以混用不同的日期类型
        let naive_expiry = expiry.naive_utc();
        assert_eq!(days_until(today(), Some(naive_expiry)), Some(1));
        assert_eq!(days_until(now, Some(&naive_expiry)), Some(1));
    }

    // ==========================================
    // lifecycle_progress
    // ==========================================

    #[test]
    fn test_lifecycle_progress() {
        let mut rec = record("B1", None);
        assert_eq!(lifecycle_progress(&rec, today()), None);

        rec.reference_date = today() - Duration::days(25);
        rec.expiry_date = in_days(75);
        assert_eq!(lifecycle_progress(&rec, today()), Some(25.0));

        // 过期后不截断
        assert_eq!(lifecycle_progress(&rec, today() + Duration::days(100)), Some(125.0));
    }

    #[test]
    fn test_lifecycle_progress_malformed_span() {
        let mut rec = record("B2", in_days(-10));
        rec.reference_date = today();
        assert_eq!(lifecycle_progress(&rec, today()), Some(100.0));
    }

    // ==========================================
    // summarize_expiry
    // ==========================================

    #[test]
    fn test_summarize_expiry() {
        let records = vec![
            record("D1", in_days(-1)),
            record("D2", in_days(5)),
            record("D3", in_days(20)),
            record("D4", in_days(20)),
            record("D5", in_days(200)),
            record("D6", None),
        ];
        let overview = summarize_expiry(&records, today(), &ThresholdTable::inventory());

        assert_eq!(overview.total_count, 6);
        assert_eq!(overview.expired_count, 1);
        assert_eq!(overview.tier_counts.get("Critical"), Some(&1));
        assert_eq!(overview.tier_counts.get("Soon"), Some(&2));
        assert_eq!(overview.tier_counts.get("Warning"), None);
        assert_eq!(overview.healthy_count, 1);
        assert_eq!(overview.no_expiry_count, 1);
        assert_eq!(overview.overall_risk, RiskLevel::Red);

        let next = overview.next_expiry.unwrap();
        assert_eq!(next.record_id, "D2");
        assert_eq!(next.days_remaining, 5);
    }

    #[test]
    fn test_summarize_expiry_order_independent() {
        let mut records = vec![
            record("L2", in_days(40)),
            record("L1", in_days(40)),
            record("L3", in_days(90)),
        ];
        let table = ThresholdTable::license();
        let forward = summarize_expiry(&records, today(), &table);
        records.reverse();
        let backward = summarize_expiry(&records, today(), &table);

        assert_eq!(forward, backward);
        assert_eq!(forward.next_expiry.unwrap().record_id, "L1");
        assert_eq!(backward.overall_risk, RiskLevel::Yellow);
    }

    #[test]
    fn test_summarize_empty() {
        let overview = summarize_expiry(&[], today(), &ThresholdTable::inventory());
        assert_eq!(overview, ExpiryOverview::default());
    }
}
