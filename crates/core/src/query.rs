//! Itinerary description for a fare search.

use chrono::NaiveDate;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a CLI spelling does not name a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value `{value}` (expected one of: {expected})")]
pub struct UnknownValue {
    pub value: String,
    pub expected: &'static str,
}

/// One direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    Outbound,
    Return,
}

impl Leg {
    /// Lowercase label used in logs and messages.
    pub fn label(self) -> &'static str {
        match self {
            Leg::Outbound => "outbound",
            Leg::Return => "return",
        }
    }
}

/// Time-of-day window a departure must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    Anytime,
    Morning,
    Afternoon,
    Evening,
}

impl FromStr for TimeWindow {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anytime" => Ok(TimeWindow::Anytime),
            "morning" => Ok(TimeWindow::Morning),
            "afternoon" => Ok(TimeWindow::Afternoon),
            "evening" => Ok(TimeWindow::Evening),
            other => Err(UnknownValue {
                value: other.to_string(),
                expected: "anytime, morning, afternoon, evening",
            }),
        }
    }
}

/// Whether fares are denominated in dollars or loyalty points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FareMode {
    #[default]
    Dollars,
    Points,
}

impl FromStr for FareMode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dollars" => Ok(FareMode::Dollars),
            "points" => Ok(FareMode::Points),
            other => Err(UnknownValue {
                value: other.to_string(),
                expected: "dollars, points",
            }),
        }
    }
}

/// Fare search parameters, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareQuery {
    /// Origin airport code.
    pub origin: CompactString,
    /// Destination airport code.
    pub destination: CompactString,
    /// Outbound travel date.
    pub outbound_date: NaiveDate,
    /// Departure window for the outbound leg.
    pub outbound_window: TimeWindow,
    /// Return travel date; `None` for a one-way itinerary.
    pub return_date: Option<NaiveDate>,
    /// Departure window for the return leg.
    pub return_window: TimeWindow,
    /// Number of travelers.
    pub passengers: u32,
    /// Price denomination for the search.
    pub mode: FareMode,
    /// Restrict results to nonstop flights.
    pub nonstop_only: bool,
}

impl FareQuery {
    /// True when no return leg is being searched.
    pub fn is_one_way(&self) -> bool {
        self.return_date.is_none()
    }

    /// Short route label, e.g. `LAX -> JFK`.
    pub fn route(&self) -> String {
        format!("{} -> {}", self.origin, self.destination)
    }
}

impl fmt::Display for FareQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.route(), self.outbound_date)?;
        if let Some(ret) = self.return_date {
            write!(f, " returning {}", ret)?;
        }
        Ok(())
    }
}
