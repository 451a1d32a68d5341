//! Deal thresholds configured by the user.

use serde::{Deserialize, Serialize};

/// Price ceilings that make a cycle alert-worthy.
///
/// `combined` applies to the outbound + return total and is never evaluated
/// for a one-way itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DealThreshold {
    /// Ceiling for a single leg.
    pub individual: Option<u64>,
    /// Ceiling for the round-trip total.
    pub combined: Option<u64>,
}

impl DealThreshold {
    /// True when at least one ceiling is configured.
    pub fn is_configured(&self) -> bool {
        self.individual.is_some() || self.combined.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_configured() {
        assert!(!DealThreshold::default().is_configured());
        let individual = DealThreshold {
            individual: Some(90),
            combined: None,
        };
        assert!(individual.is_configured());
    }
}
