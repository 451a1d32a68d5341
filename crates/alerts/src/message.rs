//! Alert message formatting.

use farewatch_core::{format_fare, CycleResult, FareQuery};

/// Format a deal alert for a cycle whose prices crossed a threshold.
pub fn format_deal_message(query: &FareQuery, cycle: &CycleResult) -> String {
    let mut msg = format!("Deal alert for {}!", query);

    if let Some(price) = cycle.outbound {
        msg.push_str(&format!("\nOutbound: {}", format_fare(price, query.mode)));
    }
    if let Some(price) = cycle.ret {
        msg.push_str(&format!("\nReturn: {}", format_fare(price, query.mode)));
    }
    if let Some(total) = cycle.combined_total() {
        msg.push_str(&format!("\nTotal: {}", format_fare(total, query.mode)));
    }

    let now = chrono::Local::now();
    msg.push_str(&format!("\n{}", now.format("%Y-%m-%d %H:%M")));
    msg
}

/// Format the scheduled daily summary from the latest observed prices.
///
/// Round trips report the combined total, one-ways the outbound leg only.
pub fn format_daily_summary(
    query: &FareQuery,
    outbound: Option<u64>,
    ret: Option<u64>,
) -> String {
    let mode = query.mode;
    let status = if query.is_one_way() {
        match outbound {
            Some(price) => format!("outbound currently {}", format_fare(price, mode)),
            None => "no fares observed yet".to_string(),
        }
    } else {
        match (outbound, ret) {
            (Some(out), Some(ret)) => format!(
                "total currently {} (outbound {}, return {})",
                format_fare(out + ret, mode),
                format_fare(out, mode),
                format_fare(ret, mode)
            ),
            (Some(out), None) => format!(
                "outbound currently {}, return not yet observed",
                format_fare(out, mode)
            ),
            (None, Some(ret)) => format!(
                "return currently {}, outbound not yet observed",
                format_fare(ret, mode)
            ),
            (None, None) => "no fares observed yet".to_string(),
        }
    };
    format!("Daily update for {}: {}", query, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use farewatch_core::{FareMode, TimeWindow};
    use pretty_assertions::assert_eq;

    fn round_trip() -> FareQuery {
        FareQuery {
            origin: "LAX".into(),
            destination: "JFK".into(),
            outbound_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            outbound_window: TimeWindow::Anytime,
            return_date: NaiveDate::from_ymd_opt(2026, 9, 8),
            return_window: TimeWindow::Anytime,
            passengers: 1,
            mode: FareMode::Dollars,
            nonstop_only: false,
        }
    }

    fn one_way() -> FareQuery {
        FareQuery {
            return_date: None,
            ..round_trip()
        }
    }

    #[test]
    fn test_deal_message_round_trip() {
        let cycle = CycleResult {
            outbound: Some(85),
            ret: Some(200),
        };
        let msg = format_deal_message(&round_trip(), &cycle);
        assert!(msg.starts_with("Deal alert for LAX -> JFK"));
        assert!(msg.contains("Outbound: $85"));
        assert!(msg.contains("Return: $200"));
        assert!(msg.contains("Total: $285"));
    }

    #[test]
    fn test_deal_message_skips_missing_leg() {
        let cycle = CycleResult {
            outbound: Some(85),
            ret: None,
        };
        let msg = format_deal_message(&round_trip(), &cycle);
        assert!(msg.contains("Outbound: $85"));
        assert!(!msg.contains("Return:"));
        assert!(!msg.contains("Total:"));
    }

    #[test]
    fn test_daily_summary_round_trip_total() {
        let msg = format_daily_summary(&round_trip(), Some(100), Some(150));
        assert_eq!(
            msg,
            "Daily update for LAX -> JFK on 2026-09-01 returning 2026-09-08: \
             total currently $250 (outbound $100, return $150)"
        );
    }

    #[test]
    fn test_daily_summary_one_way_uses_outbound_only() {
        let msg = format_daily_summary(&one_way(), Some(120), None);
        assert_eq!(
            msg,
            "Daily update for LAX -> JFK on 2026-09-01: outbound currently $120"
        );
    }

    #[test]
    fn test_daily_summary_empty_history() {
        let msg = format_daily_summary(&round_trip(), None, None);
        assert!(msg.ends_with("no fares observed yet"));
    }
}
