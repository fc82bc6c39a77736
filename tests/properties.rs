use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;
use rainbow_chart::{
    analysis::{augment, rainbow_bands, rainbow_value},
    parse_market_chart,
    utils::epoch_ms_to_date,
};

const BANDS: usize = 7;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
}

// 1990-01-01 .. 2100-01-01 in epoch millis.
fn any_timestamp_ms() -> impl Strategy<Value = i64> {
    631_152_000_000i64..4_102_444_800_000i64
}

fn any_price() -> impl Strategy<Value = f64> {
    1e-6f64..1e7f64
}

proptest! {
    #[test]
    fn band_value_rises_with_date(
        offset in -3_650i64..40_000,
        gap in 1i64..20_000,
        palette_index in 0usize..BANDS,
    ) {
        let d1 = anchor() + TimeDelta::days(offset);
        let d2 = d1 + TimeDelta::days(gap);
        prop_assert!(rainbow_value(d1, palette_index) < rainbow_value(d2, palette_index));
    }

    #[test]
    fn band_value_rises_with_palette_index(
        offset in -3_650i64..40_000,
        lower in 0usize..BANDS - 1,
        step in 1usize..BANDS,
    ) {
        let upper = (lower + step).min(BANDS - 1);
        prop_assume!(upper > lower);
        let date = anchor() + TimeDelta::days(offset);
        prop_assert!(rainbow_value(date, lower) < rainbow_value(date, upper));
    }

    #[test]
    fn every_pair_becomes_one_flat_point_with_seven_bands(
        pairs in prop::collection::vec((any_timestamp_ms(), any_price()), 0..64),
    ) {
        let rows: Vec<String> = pairs
            .iter()
            .map(|(ts, price)| format!("[{},{}]", ts, price))
            .collect();
        let body = format!(r#"{{"prices":[{}]}}"#, rows.join(","));

        let points = parse_market_chart(&body).unwrap();
        prop_assert_eq!(points.len(), pairs.len());

        let augmented = augment(&points);
        prop_assert_eq!(augmented.len(), pairs.len());

        for (row, &(ts, price)) in augmented.iter().zip(&pairs) {
            let p = row.point;
            prop_assert_eq!(p.timestamp_ms, ts);
            prop_assert_eq!(Some(p.date), epoch_ms_to_date(ts));
            prop_assert!(((p.price - price) / price).abs() < 1e-12);
            prop_assert_eq!(p.open, p.price);
            prop_assert_eq!(p.high, p.price);
            prop_assert_eq!(p.low, p.price);
            prop_assert_eq!(p.close, p.price);
            prop_assert_eq!(row.bands.len(), BANDS);
            prop_assert_eq!(row.bands, rainbow_bands(p.date));
        }
    }
}
