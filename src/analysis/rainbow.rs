use chrono::NaiveDate;

use crate::{
    config::{BAND_COUNT, RAINBOW},
    domain::PricePoint,
    utils::days_since_anchor,
};

/// A price sample together with its seven band values, lowest band first.
#[derive(Debug, Clone, PartialEq)]
pub struct RainbowPoint {
    pub point: PricePoint,
    pub bands: [f64; BAND_COUNT],
}

/// Base curve value for a (possibly fractional) day offset from the anchor.
pub fn base_curve(days: f64) -> f64 {
    10f64.powf(RAINBOW.exponent_offset + days / RAINBOW.days_per_decade) / RAINBOW.divisor
}

/// Band value at `days` for `palette_index`. Index `center_index` sits on the
/// base curve; each step away scales by `band_ratio`.
pub fn rainbow_value_at(days: f64, palette_index: usize) -> f64 {
    let exponent = palette_index as i32 - RAINBOW.center_index;
    base_curve(days) * RAINBOW.band_ratio.powi(exponent)
}

pub fn rainbow_value(date: NaiveDate, palette_index: usize) -> f64 {
    rainbow_value_at(days_since_anchor(date), palette_index)
}

pub fn rainbow_bands(date: NaiveDate) -> [f64; BAND_COUNT] {
    let days = days_since_anchor(date);
    std::array::from_fn(|i| rainbow_value_at(days, i))
}

/// Attaches the band values to every point. Only the date of each point is read.
pub fn augment(points: &[PricePoint]) -> Vec<RainbowPoint> {
    points
        .iter()
        .map(|p| RainbowPoint {
            point: *p,
            bands: rainbow_bands(p.date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-12
    }

    #[test]
    fn anchor_center_band_is_one() {
        assert!(approx(rainbow_value(date(2010, 1, 1), 3), 1.0));
        assert!(approx(rainbow_value(date(2010, 1, 1), 4), 1.2));
        assert!(approx(rainbow_value(date(2010, 1, 1), 0), 1.0 / 1.728));
    }

    #[test]
    fn grows_tenfold_every_1400_days() {
        let start = date(2010, 1, 1);
        let later = start + chrono::Days::new(1400);
        assert!(approx(rainbow_value(later, 3), 10.0));
    }

    #[test]
    fn deterministic() {
        let d = date(2021, 6, 30);
        for i in 0..BAND_COUNT {
            assert_eq!(rainbow_value(d, i).to_bits(), rainbow_value(d, i).to_bits());
        }
    }

    #[test]
    fn strictly_increasing_in_palette_index() {
        for d in [date(2009, 3, 1), date(2013, 1, 1), date(2024, 4, 20)] {
            let bands = rainbow_bands(d);
            assert!(bands.windows(2).all(|w| w[0] < w[1]), "{:?}", bands);
        }
    }

    #[test]
    fn strictly_increasing_in_date() {
        let mut previous = date(2010, 1, 1);
        for step in [1u64, 7, 30, 365, 1000] {
            let next = previous + chrono::Days::new(step);
            for i in 0..BAND_COUNT {
                assert!(rainbow_value(previous, i) < rainbow_value(next, i));
            }
            previous = next;
        }
    }

    #[test]
    fn augment_keeps_points_and_adds_seven_bands() {
        let points = vec![
            PricePoint::new(1_700_000_000_000, date(2023, 11, 14), 37_000.0),
            PricePoint::new(1_700_086_400_000, date(2023, 11, 15), 37_500.0),
        ];
        let augmented = augment(&points);
        assert_eq!(augmented.len(), 2);
        for (a, p) in augmented.iter().zip(&points) {
            assert_eq!(&a.point, p);
            assert_eq!(a.bands.len(), 7);
            assert_eq!(a.bands[3], rainbow_value(p.date, 3));
        }
    }
}
