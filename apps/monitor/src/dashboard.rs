//! Log-line dashboard sink.

use farewatch_core::{format_fare, FareMode};
use farewatch_engine::{DashboardSink, PricePoint};
use tracing::info;

/// Renders the dashboard feed as structured log lines.
pub struct LogDashboard {
    mode: FareMode,
}

impl LogDashboard {
    pub fn new(mode: FareMode) -> Self {
        Self { mode }
    }

    fn render(&self, price: Option<u64>) -> String {
        price
            .map(|p| format_fare(p, self.mode))
            .unwrap_or_else(|| "-".to_string())
    }
}

impl DashboardSink for LogDashboard {
    fn publish(&self, point: PricePoint) {
        info!(
            at = %point.at.format("%H:%M:%S"),
            outbound = %self.render(point.outbound),
            ret = %self.render(point.ret),
            "fare point"
        );
    }

    fn log(&self, line: &str) {
        info!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_missing_price_as_dash() {
        let dashboard = LogDashboard::new(FareMode::Dollars);
        assert_eq!(dashboard.render(Some(199)), "$199");
        assert_eq!(dashboard.render(None), "-");
    }
}
