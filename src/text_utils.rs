use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses the dates accepted in a post front matter.
///
/// Accepts `2023-06-01`, `2023-06-01 10:42`, `2023-06-01 10:42:32.123`, the same with a `T`
/// separator, and RFC 3339 with an offset. Offsets are normalised to UTC and date-only values
/// are midnight. Values that land outside the years 0 to 9999 once in UTC are rejected.
pub fn parse_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    lazy_static! {
        static ref DATE_TIME_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[ T](\d{1,2}):(\d{1,2})(?::(\d{1,2})(?:\.\d{1,9})?)?)?$"
        ).unwrap();
    }

    let buf = buf.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(buf) {
        let utc = dt.naive_utc();
        if !(0..=9999).contains(&utc.year()) {
            return Err(format!("Date {} is out of range once in UTC", buf));
        }
        return Ok(utc);
    }

    let Some(caps) = DATE_TIME_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    // Missing time parts default to zero
    let part = |idx: usize| caps.get(idx).map(|m| m.as_str()).unwrap_or("0");
    let y: i32 = to_int(part(1), buf)?;
    let m: u32 = to_int(part(2), buf)?;
    let d: u32 = to_int(part(3), buf)?;
    let h: u32 = to_int(part(4), buf)?;
    let mn: u32 = to_int(part(5), buf)?;
    let s: u32 = to_int(part(6), buf)?;

    let date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| format!("Invalid date {}", buf))?;
    let time = NaiveTime::from_hms_opt(h, mn, s)
        .ok_or_else(|| format!("Invalid time {}", buf))?;

    Ok(NaiveDateTime::new(date, time))
}

pub fn format_rfc2822(date_time: &NaiveDateTime) -> String {
    Utc.from_utc_datetime(date_time).to_rfc2822()
}

/// Turns a free text (file name, title) into a URL-safe slug segment.
pub fn slugify(text: &str) -> String {
    let ascii = unidecode::unidecode(text).to_ascii_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
