//! History window definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lookback window for daily history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Period {
    /// Two trading days; used for the index overview cards.
    #[serde(rename = "2d")]
    Day2,
    /// One month.
    #[default]
    #[serde(rename = "1mo")]
    Month1,
    /// Three months.
    #[serde(rename = "3mo")]
    Month3,
    /// Six months.
    #[serde(rename = "6mo")]
    Month6,
    /// One year.
    #[serde(rename = "1y")]
    Year1,
    /// Two years.
    #[serde(rename = "2y")]
    Year2,
    /// Five years.
    #[serde(rename = "5y")]
    Year5,
}

impl Period {
    /// Returns the provider range identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day2 => "2d",
            Self::Month1 => "1mo",
            Self::Month3 => "3mo",
            Self::Month6 => "6mo",
            Self::Year1 => "1y",
            Self::Year2 => "2y",
            Self::Year5 => "5y",
        }
    }

    /// Returns the periods offered for user selection.
    #[must_use]
    pub const fn selectable() -> &'static [Self] {
        &[
            Self::Month1,
            Self::Month3,
            Self::Month6,
            Self::Year1,
            Self::Year2,
            Self::Year5,
        ]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2d" => Ok(Self::Day2),
            "1mo" | "1m" | "month" => Ok(Self::Month1),
            "3mo" | "3m" => Ok(Self::Month3),
            "6mo" | "6m" => Ok(Self::Month6),
            "1y" | "12mo" | "year" => Ok(Self::Year1),
            "2y" => Ok(Self::Year2),
            "5y" => Ok(Self::Year5),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(String);

impl std::fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid period '{}', expected one of: 1mo, 3mo, 6mo, 1y, 2y, 5y",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}
