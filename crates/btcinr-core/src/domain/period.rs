use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Supported history periods, each a fixed range/granularity preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "MAX")]
    Max,
}

impl Period {
    pub const ALL: [Self; 6] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::SixMonths,
        Self::OneYear,
        Self::Max,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::Max => "MAX",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneDay => "1 Day",
            Self::OneWeek => "1 Week",
            Self::OneMonth => "1 Month",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::Max => "Max",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::OneDay => "Hourly data for the last 24 hours",
            Self::OneWeek => "Daily data for the last 7 days",
            Self::OneMonth => "Daily data for the last 30 days",
            Self::SixMonths => "Weekly data for the last 6 months",
            Self::OneYear => "Monthly data for the last 12 months",
            Self::Max => "Yearly data for the last 5 years",
        }
    }

    /// Number of points a generated series holds.
    pub const fn point_count(self) -> usize {
        match self {
            Self::OneDay => 24,
            Self::OneWeek => 7,
            Self::OneMonth => 30,
            Self::SixMonths => 26,
            Self::OneYear => 12,
            Self::Max => 5,
        }
    }

    /// Comma-separated list of every valid identifier, in catalog order.
    pub fn valid_ids() -> String {
        Self::ALL
            .iter()
            .map(|period| period.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "1W" => Ok(Self::OneWeek),
            "1M" => Ok(Self::OneMonth),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            "MAX" => Ok(Self::Max),
            _ => Err(ValidationError::InvalidPeriod {
                value: value.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_period_case_insensitively() {
        assert_eq!(Period::from_str("1d").expect("must parse"), Period::OneDay);
        assert_eq!(Period::from_str("max").expect("must parse"), Period::Max);
        assert_eq!(Period::from_str("6M").expect("must parse"), Period::SixMonths);
    }

    #[test]
    fn rejects_invalid_period() {
        let err = Period::from_str("2W").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPeriod { .. }));
    }

    #[test]
    fn rejects_padded_period() {
        let err = Period::from_str(" max ").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPeriod { .. }));
        assert!(Period::from_str("1D ").is_err());
    }

    #[test]
    fn round_trips_every_id() {
        for period in Period::ALL {
            assert_eq!(Period::from_str(period.as_str()), Ok(period));
        }
    }

    #[test]
    fn lists_valid_ids_in_catalog_order() {
        assert_eq!(Period::valid_ids(), "1D, 1W, 1M, 6M, 1Y, MAX");
    }

    #[test]
    fn serializes_to_uppercase_id() {
        let json = serde_json::to_string(&Period::SixMonths).expect("serialize");
        assert_eq!(json, "\"6M\"");
    }
}
