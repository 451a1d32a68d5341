//! Daily summary timer.
//!
//! A small re-arming state machine: `Idle` until a poll cycle arms it,
//! `Armed` while a one-shot task sleeps toward the configured time of day,
//! then back to `Idle` once the summary has been dispatched. Recurrence
//! comes from the poll loop calling `maybe_arm` again on a later cycle, so
//! the fire time is recomputed relative to "now" each day.

use crate::history::FareHistory;
use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime};
use farewatch_alerts::{format_daily_summary, AlertDispatcher};
use farewatch_core::FareQuery;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// The pending one-shot timer. At most one exists at any time.
struct Armed {
    fire_at: NaiveDateTime,
    task: JoinHandle<()>,
}

impl Drop for Armed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Schedules one summary alert per day at a fixed local time.
///
/// The fire task only reads the shared history; it never mutates it.
pub struct DailyUpdateScheduler {
    fire_time: NaiveTime,
    query: FareQuery,
    history: Arc<RwLock<FareHistory>>,
    dispatcher: Arc<AlertDispatcher>,
    armed: Arc<Mutex<Option<Armed>>>,
}

impl DailyUpdateScheduler {
    pub fn new(
        fire_time: NaiveTime,
        query: FareQuery,
        history: Arc<RwLock<FareHistory>>,
        dispatcher: Arc<AlertDispatcher>,
    ) -> Self {
        Self {
            fire_time,
            query,
            history,
            dispatcher,
            armed: Arc::new(Mutex::new(None)),
        }
    }

    /// Next scheduled fire time, while armed.
    pub fn next_fire_at(&self) -> Option<NaiveDateTime> {
        self.armed
            .lock()
            .ok()
            .and_then(|armed| armed.as_ref().map(|a| a.fire_at))
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire_at().is_some()
    }

    /// Arm the one-shot summary timer unless one is already pending.
    ///
    /// The target is today at the configured time, pushed to tomorrow when
    /// that moment has already passed. Invoked once per poll cycle; repeat
    /// calls while armed are no-ops, so re-entry never creates a second
    /// timer.
    pub fn maybe_arm(&self, now: DateTime<Local>) {
        let Ok(mut armed) = self.armed.lock() else {
            return;
        };
        if armed.is_some() {
            return;
        }

        let now_local = now.naive_local();
        let mut target = now_local.date().and_time(self.fire_time);
        if target <= now_local {
            target += Duration::days(1);
        }
        let sleep = (target - now_local).to_std().unwrap_or_default();

        let query = self.query.clone();
        let history = Arc::clone(&self.history);
        let dispatcher = Arc::clone(&self.dispatcher);
        let armed_slot = Arc::clone(&self.armed);
        let task = tokio::spawn(async move {
            tokio::time::sleep(sleep).await;

            let (outbound, ret) = {
                let history = history.read().await;
                (history.outbound(), history.ret())
            };
            let message = format_daily_summary(&query, outbound, ret);
            info!("sending daily fare update");
            dispatcher.dispatch(&message).await;

            // Back to Idle; the next poll cycle re-arms for tomorrow.
            if let Ok(mut armed) = armed_slot.lock() {
                *armed = None;
            }
        });

        debug!(fire_at = %target, "daily update armed");
        *armed = Some(Armed {
            fire_at: target,
            task,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use farewatch_alerts::{AlertChannel, ChannelError};
    use farewatch_core::{FareMode, TimeWindow};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingChannel {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AlertChannel for RecordingChannel {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn send(&self, message: &str) -> Result<(), ChannelError> {
            self.sent.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    fn one_way_query() -> FareQuery {
        FareQuery {
            origin: "LAX".into(),
            destination: "JFK".into(),
            outbound_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            outbound_window: TimeWindow::Anytime,
            return_date: None,
            return_window: TimeWindow::Anytime,
            passengers: 1,
            mode: FareMode::Dollars,
            nonstop_only: false,
        }
    }

    fn scheduler(
        fire_time: NaiveTime,
    ) -> (DailyUpdateScheduler, Arc<RecordingChannel>, Arc<RwLock<FareHistory>>) {
        let channel = Arc::new(RecordingChannel::default());
        let channels: Vec<Arc<dyn AlertChannel>> = vec![channel.clone()];
        let dispatcher = Arc::new(AlertDispatcher::new(channels));
        let history = Arc::new(RwLock::new(FareHistory::new()));
        let scheduler = DailyUpdateScheduler::new(
            fire_time,
            one_way_query(),
            Arc::clone(&history),
            dispatcher,
        );
        (scheduler, channel, history)
    }

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_arming_keeps_single_timer() {
        let (scheduler, _, _) = scheduler(NaiveTime::from_hms_opt(12, 0, 30).unwrap());
        let now = noon();

        scheduler.maybe_arm(now);
        let first = scheduler.next_fire_at();
        assert!(first.is_some());

        scheduler.maybe_arm(now + Duration::seconds(10));
        assert_eq!(scheduler.next_fire_at(), first);
    }

    #[tokio::test(start_paused = true)]
    async fn test_past_time_targets_tomorrow() {
        let (scheduler, _, _) = scheduler(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        let now = noon();

        scheduler.maybe_arm(now);
        let fire_at = scheduler.next_fire_at().unwrap();
        assert_eq!(
            fire_at,
            chrono::NaiveDate::from_ymd_opt(2026, 9, 2)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_summary_then_returns_to_idle() {
        let (scheduler, channel, history) =
            scheduler(NaiveTime::from_hms_opt(12, 0, 30).unwrap());
        let now = noon();
        history.write().await.update(&farewatch_core::CycleResult {
            outbound: Some(120),
            ret: None,
        });

        scheduler.maybe_arm(now);
        assert!(scheduler.is_armed());

        // Let the paused clock run past the fire time.
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;

        assert!(!scheduler.is_armed());
        let sent = channel.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("outbound currently $120"));

        // A later cycle re-arms for the following day.
        let later = now + Duration::seconds(120);
        scheduler.maybe_arm(later);
        let fire_at = scheduler.next_fire_at().unwrap();
        assert!(fire_at > later.naive_local());
        assert_eq!(fire_at.date(), later.date_naive() + Duration::days(1));
    }
}
