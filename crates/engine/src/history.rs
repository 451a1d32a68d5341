//! Cycle-over-cycle fare history.

use farewatch_core::{CycleResult, FareDiff};

/// Lowest prices carried over from the previous valid cycle.
///
/// Empty at startup. `update` is the only mutator; the poll driver calls it
/// once per valid cycle, so mutation is serialized by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct FareHistory {
    prev_outbound: Option<u64>,
    prev_ret: Option<u64>,
}

impl FareHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff `cycle` against the previous valid cycle, then adopt its prices.
    ///
    /// An invalid cycle leaves the state untouched and yields an empty diff.
    /// The first valid cycle also yields an empty diff: there is nothing to
    /// compare against yet.
    pub fn update(&mut self, cycle: &CycleResult) -> FareDiff {
        if !cycle.is_valid() {
            return FareDiff::default();
        }
        let diff = FareDiff {
            outbound: delta(self.prev_outbound, cycle.outbound),
            ret: delta(self.prev_ret, cycle.ret),
        };
        self.prev_outbound = cycle.outbound;
        self.prev_ret = cycle.ret;
        diff
    }

    /// Last observed outbound price.
    pub fn outbound(&self) -> Option<u64> {
        self.prev_outbound
    }

    /// Last observed return-leg price.
    pub fn ret(&self) -> Option<u64> {
        self.prev_ret
    }
}

/// `previous - current`: positive means the price dropped.
fn delta(previous: Option<u64>, current: Option<u64>) -> Option<i64> {
    Some(previous? as i64 - current? as i64)
}
