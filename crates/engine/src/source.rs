//! External fare-source seam.

use async_trait::async_trait;
use farewatch_core::{FareQuery, FareSample, Leg};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("fare request failed: {0}")]
    Request(String),
    #[error("fare response unreadable: {0}")]
    Response(String),
}

/// Markup fragments captured by one fare query, grouped by leg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FareFragments {
    pub outbound: Vec<String>,
    pub ret: Vec<String>,
}

impl FareFragments {
    pub fn is_empty(&self) -> bool {
        self.outbound.is_empty() && self.ret.is_empty()
    }

    /// Flatten into leg-tagged samples for the aggregator.
    pub fn into_samples(self) -> Vec<FareSample> {
        let mut samples = Vec::with_capacity(self.outbound.len() + self.ret.len());
        samples.extend(
            self.outbound
                .into_iter()
                .map(|markup| FareSample::new(Leg::Outbound, markup)),
        );
        samples.extend(
            self.ret
                .into_iter()
                .map(|markup| FareSample::new(Leg::Return, markup)),
        );
        samples
    }
}

/// External fare-booking source.
///
/// Called once per poll cycle. Implementations surface transport failures as
/// `SourceError` and "no matching flights" as empty fragment lists; neither
/// aborts the cycle.
#[async_trait]
pub trait FareSource: Send + Sync {
    async fn query(&self, query: &FareQuery) -> Result<FareFragments, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_into_samples_tags_legs() {
        let fragments = FareFragments {
            outbound: vec!["$199".to_string()],
            ret: vec!["$220".to_string(), "$185".to_string()],
        };
        let samples = fragments.into_samples();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].leg, Leg::Outbound);
        assert_eq!(samples[1].leg, Leg::Return);
        assert_eq!(samples[2].markup, "$185");
    }

    #[test]
    fn test_empty() {
        assert!(FareFragments::default().is_empty());
    }
}
