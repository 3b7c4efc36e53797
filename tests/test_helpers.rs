// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供临时配置库、测试数据构造
// ==========================================

#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use compliance_status::{LedgerEntry, LedgerStatus, LifecycleRecord, RecordKind};
use rusqlite::{params, Connection};
use std::error::Error;
use tempfile::NamedTempFile;

/// 创建临时测试数据库
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("临时文件路径不是 UTF-8")?
        .to_string();
    Ok((temp_file, db_path))
}

/// 直接写入一条 global 配置（绕过 ConfigManager 校验,模拟脏数据）
pub fn insert_raw_config(db_path: &str, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
    let conn = Connection::open(db_path)?;
    conn.execute(
        "INSERT OR REPLACE INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

/// 基准日期: 2026-06-15
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 9, 30, 0).unwrap()
}

pub fn ledger_entry(quantity: f64, cost: Option<f64>, status: LedgerStatus) -> LedgerEntry {
    LedgerEntry {
        quantity,
        unit: "kg".to_string(),
        cost_per_unit: cost,
        status,
        timestamp: timestamp(),
    }
}

pub fn license(id: &str, expires_in_days: Option<i64>) -> LifecycleRecord {
    LifecycleRecord {
        record_id: id.to_string(),
        name: format!("License {}", id),
        kind: RecordKind::License,
        reference_date: today() - Duration::days(300),
        expiry_date: expires_in_days.map(|d| today() + Duration::days(d)),
    }
}
