use serde::Serialize;
use serde_json::Value;
use std::fmt;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Simple "YYYY-MM" bucketing key with ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: u16,
    pub month: u8, // 1..=12
}

impl YearMonth {
    pub fn new(year: u16, month: u8) -> Self {
        assert!((1..=12).contains(&month), "Month must be 1..=12");
        Self { year, month }
    }

    pub fn of(dt: &PrimitiveDateTime) -> Self {
        let date = dt.date();
        Self {
            year: date.year().clamp(0, u16::MAX as i32) as u16,
            month: date.month() as u8,
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

const FMT_FULL: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const FMT_MINUTE: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
const FMT_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const FMT_SLASH: &[FormatItem<'static>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");

/// Parse a raw `publish_time` value. Accepts a unix-epoch number, an
/// all-digit epoch string, or one of the common datetime string layouts.
/// Anything unparseable is coerced to `None`, never an error.
pub fn parse_publish_time(raw: &Value) -> Option<PrimitiveDateTime> {
    match raw {
        Value::Number(n) => n.as_i64().and_then(from_epoch),
        Value::String(s) => parse_publish_time_str(s),
        _ => None,
    }
}

pub fn parse_publish_time_str(s: &str) -> Option<PrimitiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().all(|c| c.is_ascii_digit()) {
        return s.parse::<i64>().ok().and_then(from_epoch);
    }
    if let Ok(dt) = PrimitiveDateTime::parse(s, FMT_FULL) {
        return Some(dt);
    }
    if let Ok(dt) = PrimitiveDateTime::parse(s, FMT_MINUTE) {
        return Some(dt);
    }
    if let Ok(dt) = PrimitiveDateTime::parse(s, FMT_SLASH) {
        return Some(dt);
    }
    if let Ok(d) = Date::parse(s, FMT_DATE) {
        return Some(PrimitiveDateTime::new(d, Time::MIDNIGHT));
    }
    None
}

fn from_epoch(ts: i64) -> Option<PrimitiveDateTime> {
    let odt = OffsetDateTime::from_unix_timestamp(ts).ok()?;
    Some(PrimitiveDateTime::new(odt.date(), odt.time()))
}

/// "YYYY-MM-DD" key; lexicographic order matches chronological order.
pub fn date_key(dt: &PrimitiveDateTime) -> String {
    let d = dt.date();
    format!("{:04}-{:02}-{:02}", d.year(), d.month() as u8, d.day())
}
