use {
    clap::ValueEnum,
    strum_macros::{Display, EnumIter},
};

/// The closed set of chart ranges offered by the selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, ValueEnum, Ord, PartialOrd,
)]
pub enum TimeRange {
    #[strum(to_string = "1D")]
    #[value(name = "1D")]
    OneDay,

    #[strum(to_string = "1M")]
    #[value(name = "1M")]
    OneMonth,

    #[strum(to_string = "1Y")]
    #[value(name = "1Y")]
    #[default]
    OneYear,

    #[strum(to_string = "YTD")]
    #[value(name = "YTD")]
    YearToDate,

    #[strum(to_string = "ALL")]
    #[value(name = "ALL")]
    All,
}

impl TimeRange {
    /// Value of the upstream `days` query parameter.
    pub fn api_days(&self) -> &'static str {
        match self {
            TimeRange::OneDay => "1",
            TimeRange::OneMonth => "30",
            TimeRange::OneYear => "365",
            TimeRange::YearToDate => "ytd",
            TimeRange::All => "max",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn api_days_mapping_is_exact() {
        let mapped: Vec<(String, &str)> = TimeRange::iter()
            .map(|r| (r.to_string(), r.api_days()))
            .collect();
        assert_eq!(
            mapped,
            vec![
                ("1D".to_string(), "1"),
                ("1M".to_string(), "30"),
                ("1Y".to_string(), "365"),
                ("YTD".to_string(), "ytd"),
                ("ALL".to_string(), "max"),
            ]
        );
    }

    #[test]
    fn default_range_is_one_year() {
        assert_eq!(TimeRange::default(), TimeRange::OneYear);
    }

    #[test]
    fn parses_cli_labels() {
        assert_eq!(TimeRange::from_str("YTD", false), Ok(TimeRange::YearToDate));
        assert_eq!(TimeRange::from_str("1m", true), Ok(TimeRange::OneMonth));
        assert!(TimeRange::from_str("2W", true).is_err());
    }
}
