//! Rainbow band and halving constants

use chrono::NaiveDate;
use eframe::egui::Color32;

/// Number of rainbow bands drawn over the price.
pub const BAND_COUNT: usize = 7;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in config"),
    }
}

/// Tuning of the logarithmic growth curve:
/// `10^(exponent_offset + days / days_per_decade) / divisor * band_ratio^(index - center_index)`
pub struct RainbowConfig {
    /// Day zero of the curve (UTC midnight).
    pub anchor: NaiveDate,
    pub exponent_offset: f64,
    /// Days for the base curve to grow tenfold.
    pub days_per_decade: f64,
    pub divisor: f64,
    /// Multiplicative spacing between adjacent bands.
    pub band_ratio: f64,
    /// Palette index that sits exactly on the base curve.
    pub center_index: i32,
    pub colors: [Color32; BAND_COUNT],
    pub labels: [&'static str; BAND_COUNT],
}

pub const RAINBOW: RainbowConfig = RainbowConfig {
    anchor: ymd(2010, 1, 1),
    exponent_offset: 4.0,
    days_per_decade: 1400.0,
    divisor: 10_000.0,
    band_ratio: 1.2,
    center_index: 3,
    colors: [
        Color32::from_rgb(0xFF, 0x00, 0x00),
        Color32::from_rgb(0xFF, 0x7F, 0x00),
        Color32::from_rgb(0xFF, 0xFF, 0x00),
        Color32::from_rgb(0x00, 0xFF, 0x00),
        Color32::from_rgb(0x00, 0x00, 0xFF),
        Color32::from_rgb(0x4B, 0x00, 0x82),
        Color32::from_rgb(0x8B, 0x00, 0xFF),
    ],
    labels: [
        "Rainbow 1",
        "Rainbow 2",
        "Rainbow 3",
        "Rainbow 4",
        "Rainbow 5",
        "Rainbow 6",
        "Rainbow 7",
    ],
};

/// Bitcoin block-reward halvings, in chronological order.
pub const HALVING_DATES: [NaiveDate; 4] = [
    ymd(2012, 11, 28),
    ymd(2016, 7, 9),
    ymd(2020, 5, 11),
    ymd(2024, 4, 20),
];
