//! Display helpers shared by alert messages and the dashboard feed.

use crate::FareMode;

/// Group a whole number with thousands separators, e.g. `12345` -> `12,345`.
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render a fare amount in its denomination: `$199` or `12,345 pts`.
pub fn format_fare(amount: u64, mode: FareMode) -> String {
    match mode {
        FareMode::Dollars => format!("${}", group_thousands(amount)),
        FareMode::Points => format!("{} pts", group_thousands(amount)),
    }
}

/// Describe a signed price movement: `down $20`, `up $5`, or `no change`.
///
/// The sign convention follows the history diff: positive means the price
/// dropped.
pub fn describe_delta(delta: i64, mode: FareMode) -> String {
    match delta {
        0 => "no change".to_string(),
        d if d > 0 => format!("down {}", format_fare(d as u64, mode)),
        d => format!("up {}", format_fare(d.unsigned_abs(), mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_fare_dollars() {
        assert_eq!(format_fare(199, FareMode::Dollars), "$199");
        assert_eq!(format_fare(1234, FareMode::Dollars), "$1,234");
        assert_eq!(format_fare(1234567, FareMode::Dollars), "$1,234,567");
    }

    #[test]
    fn test_format_fare_points() {
        assert_eq!(format_fare(12345, FareMode::Points), "12,345 pts");
        assert_eq!(format_fare(900, FareMode::Points), "900 pts");
    }

    #[test]
    fn test_describe_delta() {
        assert_eq!(describe_delta(20, FareMode::Dollars), "down $20");
        assert_eq!(describe_delta(-5, FareMode::Dollars), "up $5");
        assert_eq!(describe_delta(0, FareMode::Points), "no change");
    }
}
