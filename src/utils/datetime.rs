//! 时间解析工具
//!
//! 请求中的时间既可以带时区（RFC 3339），也可以是不带时区的 ISO-8601，
//! 后者按 UTC 处理。存储层统一保存 Unix 秒，小数秒在解析时截断。

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer};

use crate::errors::{Result, SchoolBotError};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// 解析 ISO-8601 时间字符串，精度为整秒（`23:59:59.750` 视为 `23:59:59`）
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc).trunc_subsecs(0));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().trunc_subsecs(0));
        }
    }

    Err(SchoolBotError::date_parse(format!(
        "Invalid datetime '{value}', expected ISO-8601 such as 2024-12-31T23:59:59"
    )))
}

/// Unix 秒转为 UTC 时间
pub fn from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

pub fn deserialize_datetime<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).map_err(|e| serde::de::Error::custom(e.message()))
}

pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_datetime(&s)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(e.message())),
        None => Ok(None),
    }
}
