//! Command-line configuration.

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use farewatch_core::{DealThreshold, FareMode, FareQuery, TimeWindow};
use farewatch_engine::MonitorConfig;

fn default_daily_update() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Accept `HH:MM` (and `HH:MM:SS`) clock times.
fn parse_time_of_day(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| format!("invalid time `{s}`: {e}"))
}

/// Southwest fare monitor CLI.
#[derive(Parser, Debug)]
#[command(name = "farewatch")]
#[command(about = "Watch Southwest fares and alert on price drops", long_about = None)]
pub struct Args {
    /// Origin airport code
    #[arg(long)]
    pub from: String,

    /// Destination airport code
    #[arg(long)]
    pub to: String,

    /// Outbound date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub leave_date: NaiveDate,

    /// Outbound departure window
    #[arg(long, default_value = "anytime")]
    pub leave_time: TimeWindow,

    /// Return date (YYYY-MM-DD); omit for one-way
    #[arg(long, value_name = "DATE")]
    pub return_date: Option<NaiveDate>,

    /// Return departure window
    #[arg(long, default_value = "anytime")]
    pub return_time: TimeWindow,

    /// Price denomination: dollars or points
    #[arg(long, default_value = "dollars")]
    pub fare_type: FareMode,

    /// Number of travelers
    #[arg(long, default_value_t = 1)]
    pub passengers: u32,

    /// Alert when a single leg drops to this price
    #[arg(long)]
    pub individual_deal_price: Option<u64>,

    /// Alert when the round-trip total drops to this price
    #[arg(long)]
    pub total_deal_price: Option<u64>,

    /// Minutes between poll cycles
    #[arg(long, default_value_t = 30)]
    pub interval: u64,

    /// Search one-way fares only
    #[arg(long, default_value_t = false)]
    pub one_way: bool,

    /// Local time for the daily summary alert
    #[arg(long, value_name = "HH:MM", value_parser = parse_time_of_day)]
    pub daily_update_at: Option<NaiveTime>,

    /// Send a daily summary (09:00 unless --daily-update-at is given)
    #[arg(long, default_value_t = false)]
    pub daily_update: bool,

    /// Only consider nonstop flights
    #[arg(long, default_value_t = false)]
    pub nonstop: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn fare_query(&self) -> FareQuery {
        let return_date = if self.one_way { None } else { self.return_date };
        FareQuery {
            origin: self.from.as_str().into(),
            destination: self.to.as_str().into(),
            outbound_date: self.leave_date,
            outbound_window: self.leave_time,
            return_date,
            return_window: self.return_time,
            passengers: self.passengers,
            mode: self.fare_type,
            nonstop_only: self.nonstop,
        }
    }

    pub fn threshold(&self) -> DealThreshold {
        DealThreshold {
            individual: self.individual_deal_price,
            combined: self.total_deal_price,
        }
    }

    pub fn monitor_config(&self) -> MonitorConfig {
        let daily_update_at = self
            .daily_update_at
            .or_else(|| self.daily_update.then(default_daily_update));
        MonitorConfig {
            interval_minutes: self.interval,
            threshold: self.threshold(),
            daily_update_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec![
            "farewatch",
            "--from",
            "LAX",
            "--to",
            "JFK",
            "--leave-date",
            "2026-09-01",
        ];
        argv.extend(extra);
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_minimal_invocation_is_one_way() {
        let args = parse(&[]);
        let query = args.fare_query();
        assert!(query.is_one_way());
        assert_eq!(query.mode, FareMode::Dollars);
        assert_eq!(args.monitor_config().interval_minutes, 30);
    }

    #[test]
    fn test_round_trip_with_thresholds() {
        let args = parse(&[
            "--return-date",
            "2026-09-08",
            "--return-time",
            "evening",
            "--individual-deal-price",
            "90",
            "--total-deal-price",
            "250",
        ]);
        let query = args.fare_query();
        assert!(!query.is_one_way());
        assert_eq!(query.return_window, TimeWindow::Evening);
        assert_eq!(
            args.threshold(),
            DealThreshold {
                individual: Some(90),
                combined: Some(250),
            }
        );
    }

    #[test]
    fn test_one_way_flag_clears_return_date() {
        let args = parse(&["--return-date", "2026-09-08", "--one-way"]);
        assert!(args.fare_query().is_one_way());
    }

    #[test]
    fn test_daily_update_defaults_to_nine() {
        let args = parse(&["--daily-update"]);
        assert_eq!(
            args.monitor_config().daily_update_at,
            NaiveTime::from_hms_opt(9, 0, 0)
        );
    }

    #[test]
    fn test_daily_update_at_parses_hh_mm() {
        let args = parse(&["--daily-update-at", "07:30"]);
        assert_eq!(
            args.monitor_config().daily_update_at,
            NaiveTime::from_hms_opt(7, 30, 0)
        );
    }

    #[test]
    fn test_points_fare_type() {
        let args = parse(&["--fare-type", "points"]);
        assert_eq!(args.fare_query().mode, FareMode::Points);
    }
}
