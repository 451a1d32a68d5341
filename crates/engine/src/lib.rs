//! Fare-monitoring engine: price extraction, cycle aggregation, history
//! diffing, deal evaluation, and the poll / daily-update schedulers.

pub mod aggregator;
pub mod daily;
pub mod evaluator;
pub mod history;
pub mod monitor;
pub mod parser;
pub mod sink;
pub mod source;

pub use aggregator::aggregate;
pub use daily::DailyUpdateScheduler;
pub use evaluator::is_deal;
pub use history::FareHistory;
pub use monitor::{FareMonitor, MonitorConfig};
pub use parser::parse_fare;
pub use sink::{DashboardSink, PricePoint};
pub use source::{FareFragments, FareSource, SourceError};
