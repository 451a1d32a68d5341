//! Fare price extraction from raw markup fragments.
//!
//! One small grammar per fare mode, no regular expressions. A fragment that
//! yields no usable number parses to `None`, which the aggregator treats as
//! "no price for this leg".

use farewatch_core::FareMode;

/// Extract a fare amount from one markup fragment.
///
/// - `Points`: the fragment's text content, with thousands separators
///   removed, must lead with a run of digits (leading whitespace allowed).
/// - `Dollars`: the first contiguous run of digits found after a `$` sign
///   anywhere in the raw markup. The run stops at a thousands separator, so
///   `$1,234` parses as `1`; only points mode strips separators.
///
/// Digit runs that overflow `u64` are parse failures.
pub fn parse_fare(fragment: &str, mode: FareMode) -> Option<u64> {
    match mode {
        FareMode::Points => parse_points(fragment),
        FareMode::Dollars => parse_dollars(fragment),
    }
}

/// Text content of a markup fragment: everything outside `<...>` tags.
fn text_content(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

fn parse_points(fragment: &str) -> Option<u64> {
    let text = text_content(fragment);
    let cleaned: String = text.chars().filter(|&c| c != ',').collect();
    let digits: String = cleaned
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn parse_dollars(fragment: &str) -> Option<u64> {
    let (_, after_sign) = fragment.split_once('$')?;
    let start = after_sign.find(|c: char| c.is_ascii_digit())?;
    let run = &after_sign[start..];
    let end = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());
    run[..end].parse().ok()
}
