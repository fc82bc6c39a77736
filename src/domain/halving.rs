use chrono::NaiveDate;

use crate::config::HALVING_DATES;

/// A fixed reference date drawn on every chart, whatever the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalvingMarker {
    /// 1-based, chronological.
    pub ordinal: usize,
    pub date: NaiveDate,
}

impl HalvingMarker {
    pub fn label(&self) -> String {
        format!("Halving {}", self.ordinal)
    }
}

pub fn halving_markers() -> impl Iterator<Item = HalvingMarker> {
    HALVING_DATES
        .iter()
        .enumerate()
        .map(|(i, &date)| HalvingMarker {
            ordinal: i + 1,
            date,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_markers_in_order() {
        let markers: Vec<HalvingMarker> = halving_markers().collect();
        assert_eq!(markers.len(), 4);
        assert!(markers.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(markers[0].label(), "Halving 1");
        assert_eq!(markers[3].date.to_string(), "2024-04-20");
    }
}
