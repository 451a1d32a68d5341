//! Dashboard-feed seam.

use chrono::{DateTime, Local};

/// One plotted fare observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePoint {
    pub at: DateTime<Local>,
    pub outbound: Option<u64>,
    pub ret: Option<u64>,
}

/// Write-only feed consumed by the dashboard.
///
/// Presentation is a pure consumer; nothing flows back into the engine, so
/// the core can be exercised without any rendering dependency.
pub trait DashboardSink: Send + Sync {
    /// Record a price observation for plotting.
    fn publish(&self, point: PricePoint);

    /// Append a free-text log line.
    fn log(&self, line: &str);
}
