use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

// ── Date parsing ──────────────────────────────────────────────────────────────

/// Parse an export-format date string into a [`NaiveDate`].
///
/// Exports write `month/day/year`, usually with a two-digit year.
/// Returns `None` for unrecognised strings and logs a warning.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    const FMTS: &[&str] = &["%m/%d/%y", "%m/%d/%Y"];
    for fmt in FMTS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    warn!("could not parse date \"{}\"", s);
    None
}

// ── Time parsing ──────────────────────────────────────────────────────────────

/// Parse an export-format time string into a [`NaiveTime`].
///
/// `meridiem` carries the optional AM/PM marker captured alongside the time.
/// When present, the hour is normalized to 24-hour form before the value is
/// built, so downstream bucketing never sees 12-hour times.
/// Returns `None` for unrecognised strings and logs a warning.
pub fn parse_time(s: &str, meridiem: Option<&str>) -> Option<NaiveTime> {
    let (hour_str, minute_str) = s.split_once(':')?;
    let hour: u32 = match hour_str.trim().parse() {
        Ok(h) if h < 24 => h,
        _ => {
            warn!("could not parse time \"{}\"", s);
            return None;
        }
    };
    let minute: u32 = match minute_str.trim().parse() {
        Ok(m) if m < 60 => m,
        _ => {
            warn!("could not parse time \"{}\"", s);
            return None;
        }
    };

    let hour = match meridiem {
        Some(marker) => to_24_hour(hour, marker),
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Convert a 12-hour clock hour to 24-hour form given its AM/PM marker.
///
/// `12 AM` maps to hour 0 and `12 PM` stays 12. Hours already >= 13 are
/// passed through untouched.
pub fn to_24_hour(hour: u32, meridiem: &str) -> u32 {
    let is_pm = meridiem.trim().to_ascii_lowercase().starts_with('p');
    match (hour, is_pm) {
        (12, false) => 0,
        (h, true) if h < 12 => h + 12,
        (h, _) => h,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
