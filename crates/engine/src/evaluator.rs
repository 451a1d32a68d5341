//! Deal-threshold evaluation.

use farewatch_core::{CycleResult, DealThreshold};

/// Decide whether a valid cycle's prices cross any configured ceiling.
///
/// The combined ceiling applies to the round-trip total and needs both legs
/// priced; it is never evaluated for a one-way itinerary. The individual
/// ceiling hits when either priced leg is at or below it (outbound only for
/// one-way). Pure.
pub fn is_deal(cycle: &CycleResult, threshold: &DealThreshold, one_way: bool) -> bool {
    let combined_hit = !one_way
        && match (threshold.combined, cycle.combined_total()) {
            (Some(ceiling), Some(total)) => total <= ceiling,
            _ => false,
        };

    let individual_hit = threshold.individual.is_some_and(|ceiling| {
        let outbound_hit = cycle.outbound.is_some_and(|price| price <= ceiling);
        let ret_hit = !one_way && cycle.ret.is_some_and(|price| price <= ceiling);
        outbound_hit || ret_hit
    });

    combined_hit || individual_hit
}
