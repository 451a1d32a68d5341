//! Booking-form submission and fare-element extraction.
//!
//! Fragments are returned raw; price extraction lives in the engine. The
//! HTML scanning is deliberately local: each leg's fare table is located by
//! its container id and only that block is searched for price elements.

use async_trait::async_trait;
use farewatch_core::{FareMode, FareQuery, TimeWindow};
use farewatch_engine::{FareFragments, FareSource, SourceError};
use tracing::debug;

const BOOKING_URL: &str = "https://www.southwest.com/flight/search-flight.html";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

const OUTBOUND_MARKER: &str = "id=\"faresOutbound\"";
const RETURN_MARKER: &str = "id=\"faresReturn\"";
const PRICE_CLASS: &str = "product_price";

/// Fare source backed by Southwest's flight-search form.
pub struct SouthwestSource {
    http: reqwest::Client,
    booking_url: String,
}

impl SouthwestSource {
    pub fn new() -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SourceError::Request(e.to_string()))?;
        Ok(Self {
            http,
            booking_url: BOOKING_URL.to_string(),
        })
    }

    /// Point the source at a different booking endpoint.
    pub fn with_booking_url(mut self, url: impl Into<String>) -> Self {
        self.booking_url = url.into();
        self
    }
}

#[async_trait]
impl FareSource for SouthwestSource {
    async fn query(&self, query: &FareQuery) -> Result<FareFragments, SourceError> {
        debug!(query = %query, "submitting booking search");
        let response = self
            .http
            .post(&self.booking_url)
            .form(&form_params(query))
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Request(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Response(e.to_string()))?;

        let fragments = extract_fragments(&body);
        debug!(
            outbound = fragments.outbound.len(),
            ret = fragments.ret.len(),
            "fare fragments extracted"
        );
        Ok(fragments)
    }
}

fn time_of_day(window: TimeWindow) -> &'static str {
    match window {
        TimeWindow::Anytime => "ANYTIME",
        TimeWindow::Morning => "BEFORE_NOON",
        TimeWindow::Afternoon => "NOON_TO_6PM",
        TimeWindow::Evening => "AFTER_6PM",
    }
}

fn fare_type(mode: FareMode) -> &'static str {
    match mode {
        FareMode::Dollars => "DOLLARS",
        FareMode::Points => "POINTS",
    }
}

fn form_params(query: &FareQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("twoWayTrip", (!query.is_one_way()).to_string()),
        ("originAirport", query.origin.to_string()),
        ("destinationAirport", query.destination.to_string()),
        (
            "outboundDateString",
            query.outbound_date.format("%m/%d/%Y").to_string(),
        ),
        (
            "outboundTimeOfDay",
            time_of_day(query.outbound_window).to_string(),
        ),
        (
            "returnTimeOfDay",
            time_of_day(query.return_window).to_string(),
        ),
        ("adultPassengerCount", query.passengers.to_string()),
        ("seniorPassengerCount", "0".to_string()),
        ("fareType", fare_type(query.mode).to_string()),
        ("showOnlyNonstop", query.nonstop_only.to_string()),
    ];
    if let Some(date) = query.return_date {
        params.push(("returnDateString", date.format("%m/%d/%Y").to_string()));
    }
    params
}

/// Pull each leg's fare elements out of the results markup.
///
/// Missing blocks yield empty lists, never errors; "no matching flights"
/// is a normal outcome.
fn extract_fragments(html: &str) -> FareFragments {
    let outbound = leg_block(html, OUTBOUND_MARKER, Some(RETURN_MARKER))
        .map(|block| elements_with_class(block, PRICE_CLASS))
        .unwrap_or_default();
    let ret = leg_block(html, RETURN_MARKER, None)
        .map(|block| elements_with_class(block, PRICE_CLASS))
        .unwrap_or_default();
    FareFragments { outbound, ret }
}

/// Slice of `html` from `start_marker` up to `end_marker` (or the end).
fn leg_block<'a>(html: &'a str, start_marker: &str, end_marker: Option<&str>) -> Option<&'a str> {
    let start = html.find(start_marker)?;
    let rest = &html[start..];
    match end_marker.and_then(|marker| rest.find(marker)) {
        Some(end) => Some(&rest[..end]),
        None => Some(rest),
    }
}

/// Collect the markup of every element in `block` whose class list mentions
/// `class`. Tolerant of attribute order and unclosed tags.
fn elements_with_class(block: &str, class: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut cursor = 0;
    while let Some(pos) = block[cursor..].find(class) {
        let at = cursor + pos;
        cursor = at + class.len();

        let Some(open) = block[..at].rfind('<') else {
            continue;
        };
        let name: String = block[open + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if name.is_empty() {
            continue;
        }

        let close_marker = format!("</{}>", name);
        let end = match block[at..].find(&close_marker) {
            Some(rel) => at + rel + close_marker.len(),
            // Unclosed element: keep the opening tag only.
            None => match block[at..].find('>') {
                Some(rel) => at + rel + 1,
                None => block.len(),
            },
        };
        found.push(block[open..end].to_string());
        cursor = cursor.max(end);
    }
    found
}
