use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar season a product is merchandised for. `AllSeasons` marks
/// season-agnostic items and is never derived from a month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
    AllSeasons,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognized season label `{0}`")]
pub struct SeasonParseError(pub String);

impl Season {
    /// Maps a calendar month (1-12) onto the fixed season partition:
    /// {12,1,2} Winter, {3,4,5} Spring, {6,7,8} Summer, {9,10,11} Autumn.
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            12 | 1 | 2 => Some(Self::Winter),
            3..=5 => Some(Self::Spring),
            6..=8 => Some(Self::Summer),
            9..=11 => Some(Self::Autumn),
            _ => None,
        }
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        // month() is always 1-12, so the partition is total here.
        Self::from_month(at.month()).unwrap_or(Self::Winter)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::AllSeasons => "All Seasons",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Season {
    type Err = SeasonParseError;

    /// Parses catalog season labels. Source data is known to carry stray
    /// padding, so the label is trimmed before matching.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "autumn" | "fall" => Ok(Self::Autumn),
            "all seasons" | "all_seasons" => Ok(Self::AllSeasons),
            _ => Err(SeasonParseError(value.trim().to_owned())),
        }
    }
}

/// One row of the catalog snapshot. Immutable for the duration of a
/// scoring call; the engine never mutates or fabricates products.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Free-text tags, the input to content vectorization.
    pub tags: String,
    /// Aggregate rating on a 0-5 scale as observed in the snapshot.
    pub rating: f64,
    pub reviews_count: u64,
    pub image_url: String,
    pub season: Season,
}
