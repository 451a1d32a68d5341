//! The poll driver.

use crate::aggregator::aggregate;
use crate::daily::DailyUpdateScheduler;
use crate::evaluator::is_deal;
use crate::history::FareHistory;
use crate::sink::{DashboardSink, PricePoint};
use crate::source::{FareFragments, FareSource};
use chrono::{DateTime, Local, NaiveTime};
use farewatch_alerts::{format_deal_message, AlertDispatcher};
use farewatch_core::{describe_delta, format_fare, CycleResult, DealThreshold, FareDiff, FareQuery};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Tunables for the poll loop.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Minutes between poll cycles, measured from cycle completion.
    pub interval_minutes: u64,
    /// Deal ceilings.
    pub threshold: DealThreshold,
    /// Local time of day for the daily summary, when enabled.
    pub daily_update_at: Option<NaiveTime>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 30,
            threshold: DealThreshold::default(),
            daily_update_at: None,
        }
    }
}

/// Top-level poll driver.
///
/// Owns all state that outlives a single cycle: the query, the shared fare
/// history (read concurrently by the daily timer), and the daily scheduler
/// itself. Every other component is invoked in sequence once per cycle, so
/// at most one cycle is ever in flight.
pub struct FareMonitor {
    query: FareQuery,
    config: MonitorConfig,
    source: Arc<dyn FareSource>,
    sink: Arc<dyn DashboardSink>,
    dispatcher: Arc<AlertDispatcher>,
    history: Arc<RwLock<FareHistory>>,
    daily: Option<DailyUpdateScheduler>,
}

impl FareMonitor {
    pub fn new(
        query: FareQuery,
        config: MonitorConfig,
        source: Arc<dyn FareSource>,
        sink: Arc<dyn DashboardSink>,
        dispatcher: Arc<AlertDispatcher>,
    ) -> Self {
        let history = Arc::new(RwLock::new(FareHistory::new()));
        let daily = config.daily_update_at.map(|fire_time| {
            DailyUpdateScheduler::new(
                fire_time,
                query.clone(),
                Arc::clone(&history),
                Arc::clone(&dispatcher),
            )
        });
        Self {
            query,
            config,
            source,
            sink,
            dispatcher,
            history,
            daily,
        }
    }

    fn interval(&self) -> Duration {
        Duration::from_secs(self.config.interval_minutes * 60)
    }

    /// Poll forever. The pause is measured from cycle completion, so fetch
    /// latency delays the next trigger instead of compounding with it.
    pub async fn run(&self) {
        info!(
            query = %self.query,
            interval_minutes = self.config.interval_minutes,
            "fare monitor started"
        );
        loop {
            self.run_cycle(Local::now()).await;
            tokio::time::sleep(self.interval()).await;
        }
    }

    /// One complete cycle: fetch, aggregate, diff, evaluate, dispatch.
    pub async fn run_cycle(&self, now: DateTime<Local>) {
        let one_way = self.query.is_one_way();

        let fragments = match self.source.query(&self.query).await {
            Ok(fragments) => fragments,
            Err(e) => {
                warn!(error = %e, "fare query failed");
                FareFragments::default()
            }
        };

        let samples = fragments.into_samples();
        let cycle = aggregate(&samples, self.query.mode, one_way);

        if !cycle.is_valid() {
            warn!(
                retry_minutes = self.config.interval_minutes,
                "no matching flights found"
            );
            self.sink.log(&format!(
                "No matching flights; retrying in {} minutes",
                self.config.interval_minutes
            ));
        } else {
            let diff = self.history.write().await.update(&cycle);
            self.sink.publish(PricePoint {
                at: now,
                outbound: cycle.outbound,
                ret: cycle.ret,
            });
            self.sink.log(&self.price_line(&cycle, &diff));

            if is_deal(&cycle, &self.config.threshold, one_way) {
                info!("deal threshold crossed");
                let message = format_deal_message(&self.query, &cycle);
                let dispatcher = Arc::clone(&self.dispatcher);
                // Detached: a slow channel must not stall the next cycle.
                tokio::spawn(async move { dispatcher.dispatch(&message).await });
            }
        }

        if let Some(daily) = &self.daily {
            daily.maybe_arm(now);
        }
    }

    fn price_line(&self, cycle: &CycleResult, diff: &FareDiff) -> String {
        let mode = self.query.mode;
        let mut parts = Vec::with_capacity(2);
        if let Some(price) = cycle.outbound {
            let movement = diff
                .outbound
                .map(|d| format!(" ({})", describe_delta(d, mode)))
                .unwrap_or_default();
            parts.push(format!("outbound {}{}", format_fare(price, mode), movement));
        }
        if let Some(price) = cycle.ret {
            let movement = diff
                .ret
                .map(|d| format!(" ({})", describe_delta(d, mode)))
                .unwrap_or_default();
            parts.push(format!("return {}{}", format_fare(price, mode), movement));
        }
        format!("{}: {}", self.query.route(), parts.join(", "))
    }
}
