//! Tolerant conversion of raw string fields into typed values.
//!
//! All helpers are total: malformed or empty input gives the type's zero
//! value, never an error.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Base-10 unsigned integer, or 0.
pub fn to_uint(s: &str) -> u64 {
    s.parse().unwrap_or(0)
}

/// Decimal number parsed at double precision then narrowed, or 0.
pub fn to_f32(s: &str) -> f32 {
    s.parse::<f64>().map(|f| f as f32).unwrap_or(0.0)
}

/// True only for a case-insensitive "YES".
pub fn to_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("yes")
}

/// Parse `<ZONE> <YYYY-MM-DD> <HH:MM:SS[.fff]>`, e.g. `UTC 2020-10-20 19:04:07`.
///
/// The zone abbreviation is taken literally with a zero offset. Returns the
/// Unix epoch when the input does not match.
pub fn to_time(s: &str) -> DateTime<Utc> {
    parse_time(s).unwrap_or_default()
}

fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    let (zone, rest) = s.split_once(' ')?;
    if zone.len() < 3 || !zone.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(rest, "%Y-%m-%d %H:%M:%S%.f").ok()?;
    Some(naive.and_utc())
}
