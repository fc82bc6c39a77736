use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta};

pub use web_time::Instant as AppInstant;

use crate::config::RAINBOW;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const TOOLTIP_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
}

/// UTC calendar day of an epoch-millisecond instant. `None` outside chrono's range.
pub fn epoch_ms_to_date(epoch_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.date_naive())
}

pub fn date_to_string(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// Real-valued day offset of `date` (taken at UTC midnight) from the rainbow anchor.
pub fn days_since_anchor(date: NaiveDate) -> f64 {
    let delta: TimeDelta = date - RAINBOW.anchor;
    delta.num_seconds() as f64 / (TimeUtils::MS_IN_D / TimeUtils::MS_IN_S) as f64
}

fn anchor_epoch_ms() -> i64 {
    RAINBOW.anchor.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

// Plot x coordinate: fractional days since the anchor, so intraday samples stay apart.
pub fn epoch_ms_to_plot_x(epoch_ms: i64) -> f64 {
    let anchor_ms = anchor_epoch_ms();
    (epoch_ms - anchor_ms) as f64 / TimeUtils::MS_IN_D as f64
}

pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    days_since_anchor(date)
}

/// Inverse of `epoch_ms_to_plot_x`, formatted for axis labels.
pub fn plot_x_to_string(x: f64, format: &str) -> String {
    let anchor_ms = anchor_epoch_ms();
    let epoch_ms = anchor_ms + (x * TimeUtils::MS_IN_D as f64).round() as i64;
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(format).to_string(),
        None => String::new(),
    }
}

pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    format!("{}h {}m", mins / 60, mins % 60)
}
