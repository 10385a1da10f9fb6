//! GS1 six-digit date normalization

use chrono::NaiveDate;

/// Interpret a six-digit GS1 date (`YYMMDD`, century 2000) as a calendar
/// date. A day of `00` means "end of month" per the GS1 General
/// Specifications. Any other length, non-digit content, or impossible
/// calendar combination yields `None`; the caller keeps the raw value
/// instead of a fabricated date.
pub fn normalize_gs1_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = 2000 + s[0..2].parse::<i32>().ok()?;
    let month = s[2..4].parse::<u32>().ok()?;
    let day = s[4..6].parse::<u32>().ok()?;

    if day == 0 {
        if !(1..=12).contains(&month) {
            return None;
        }
        let first_of_next = match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
            _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
        };
        return first_of_next.pred_opt();
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Map a date field value the way the record stores it: the ISO form when
/// it normalizes, the source value untouched when it does not.
pub fn normalize_or_raw(value: &str) -> String {
    match normalize_gs1_date(value) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}
