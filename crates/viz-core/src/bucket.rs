//! Time-bucket selection for aggregation and plotting.
//!
//! Messages are grouped either by calendar date or by time of day. The
//! selector is a tagged variant rather than an axis-name string so that key
//! extraction, axis labelling, coordinate conversion and output file naming
//! all hang off the variant.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::models::ChatMessage;

// ── Bucket ────────────────────────────────────────────────────────────────────

/// Selects which time dimension messages are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Group by calendar date; rendered as a line plot.
    ByDate,
    /// Group by time of day; rendered as a scatter plot.
    ByTime,
}

impl Bucket {
    /// Axis label shown on charts, also the output image file stem.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Bucket::ByDate => "Date",
            Bucket::ByTime => "Time",
        }
    }

    /// Extract this bucket's key from a message.
    pub fn key_of(&self, message: &ChatMessage) -> BucketKey {
        match self {
            Bucket::ByDate => BucketKey::Date(message.date),
            Bucket::ByTime => BucketKey::Time(message.time),
        }
    }

    /// Format a numeric plot coordinate back into an axis tick label.
    ///
    /// Dates use `DD-MM-YY`, times use `HH:MM`. Out-of-range coordinates
    /// produce an empty label rather than a panic.
    pub fn format_coord(&self, coord: f64) -> String {
        match self {
            Bucket::ByDate => NaiveDate::from_num_days_from_ce_opt(coord.round() as i32)
                .map(|d| d.format("%d-%m-%y").to_string())
                .unwrap_or_default(),
            Bucket::ByTime => {
                let minutes = coord.round() as i64;
                let hours = minutes.div_euclid(60).rem_euclid(24);
                let mins = minutes.rem_euclid(60);
                format!("{:02}:{:02}", hours, mins)
            }
        }
    }
}

// ── BucketKey ─────────────────────────────────────────────────────────────────

/// A concrete bucket value: one calendar date or one time of day.
///
/// Ordering follows the underlying date/time value so that `BTreeMap`-based
/// aggregation yields chronologically sorted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum BucketKey {
    Date(NaiveDate),
    Time(NaiveTime),
}

impl BucketKey {
    /// Numeric plotting coordinate for this bucket value.
    ///
    /// Dates map to days since the common era, times to minutes since
    /// midnight. Both are monotonic in the underlying value, so sorting by
    /// coordinate equals sorting chronologically.
    pub fn coord(&self) -> f64 {
        match self {
            BucketKey::Date(d) => d.num_days_from_ce() as f64,
            BucketKey::Time(t) => (t.hour() * 60 + t.minute()) as f64,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            BucketKey::Time(t) => write!(f, "{}", t.format("%H:%M")),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
