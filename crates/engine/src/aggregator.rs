//! Per-cycle reduction of fare samples to the lowest price per leg.

use crate::parser::parse_fare;
use farewatch_core::{CycleResult, FareMode, FareSample, Leg};

/// Reduce one cycle's samples to the lowest parsed price per leg.
///
/// Samples that fail to parse contribute nothing; return-leg samples are
/// discarded entirely for a one-way itinerary.
pub fn aggregate(samples: &[FareSample], mode: FareMode, one_way: bool) -> CycleResult {
    let mut result = CycleResult::default();
    for sample in samples {
        let Some(price) = parse_fare(&sample.markup, mode) else {
            continue;
        };
        let slot = match sample.leg {
            Leg::Outbound => &mut result.outbound,
            Leg::Return if one_way => continue,
            Leg::Return => &mut result.ret,
        };
        *slot = Some(slot.map_or(price, |lowest| lowest.min(price)));
    }
    result
}
