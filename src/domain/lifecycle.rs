// ==========================================
// 生产合规看板 - 有效期实体
// ==========================================
// 职责: 定义带参考日期/有效期的记录(批次、原料、许可证、文件)
// 红线: 只读快照,本模块不校验 expiry_date >= reference_date
// ==========================================

use crate::domain::types::RecordKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

// ==========================================
// CalendarDate - 取日历日
// ==========================================
// 天数差只看日历日,不看时刻,避免时分秒造成的差一天
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    fn calendar_date(&self) -> NaiveDate {
        (**self).calendar_date()
    }
}

/// 带有效期的记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleRecord {
    pub record_id: String,
    pub name: String,
    pub kind: RecordKind,
    /// 生产/签发/采购日期
    pub reference_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

/// 库存条目（批次库存、原料库存）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub item_id: String,
    pub stock_level: f64,
    pub reorder_level: f64,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}
