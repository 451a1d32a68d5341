//! Per-cycle price data: samples, aggregated results, and diffs.

use crate::Leg;
use serde::{Deserialize, Serialize};

/// One raw fare element captured by the fare source.
///
/// The markup is kept verbatim; price extraction happens later in the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareSample {
    pub leg: Leg,
    pub markup: String,
}

impl FareSample {
    pub fn new(leg: Leg, markup: impl Into<String>) -> Self {
        Self {
            leg,
            markup: markup.into(),
        }
    }
}

/// Lowest observed price per leg for one poll cycle.
///
/// `None` means no finite price was found for that leg. Constructed once per
/// cycle and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CycleResult {
    /// Lowest outbound fare.
    pub outbound: Option<u64>,
    /// Lowest return-leg fare; always `None` for a one-way itinerary.
    pub ret: Option<u64>,
}

impl CycleResult {
    /// A cycle is valid when at least one leg produced a price.
    pub fn is_valid(&self) -> bool {
        self.outbound.is_some() || self.ret.is_some()
    }

    /// Sum of both legs, available only when both legs are priced.
    pub fn combined_total(&self) -> Option<u64> {
        Some(self.outbound? + self.ret?)
    }
}

/// Signed change in the lowest price per leg between consecutive valid
/// cycles: `previous - current`, so positive means the price dropped.
///
/// A leg is `None` when there is nothing to compare (first valid cycle, or a
/// leg missing on either side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FareDiff {
    pub outbound: Option<i64>,
    /// Return-leg change.
    pub ret: Option<i64>,
}

impl FareDiff {
    pub fn is_empty(&self) -> bool {
        self.outbound.is_none() && self.ret.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cycle_validity() {
        assert!(!CycleResult::default().is_valid());
        let outbound_only = CycleResult {
            outbound: Some(199),
            ret: None,
        };
        assert!(outbound_only.is_valid());
        let return_only = CycleResult {
            outbound: None,
            ret: Some(120),
        };
        assert!(return_only.is_valid());
    }

    #[test]
    fn test_combined_total_needs_both_legs() {
        let round_trip = CycleResult {
            outbound: Some(100),
            ret: Some(150),
        };
        assert_eq!(round_trip.combined_total(), Some(250));

        let outbound_only = CycleResult {
            outbound: Some(100),
            ret: None,
        };
        assert_eq!(outbound_only.combined_total(), None);
    }

    #[test]
    fn test_diff_empty() {
        assert!(FareDiff::default().is_empty());
        let moved = FareDiff {
            outbound: Some(-20),
            ret: None,
        };
        assert!(!moved.is_empty());
    }
}
