//! Scoped auto-play timer.

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::debug;

/// Default delay between automatic steps.
pub const DEFAULT_AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(1000);

/// A repeating timer owned by exactly one traversal run.
///
/// Acquiring it starts the schedule; dropping it releases it. The engine holds
/// it in an `Option` and clears that option on stop, completion, reset and any
/// configuration change, so no timer outlives the run it was created for.
///
/// Must be created from within a Tokio runtime.
#[derive(Debug)]
pub struct AutoPlay {
    interval: Interval,
    period: Duration,
    ticks: u64,
}

impl AutoPlay {
    /// Start the timer. The first tick fires one full period from now.
    pub fn start(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(period_ms = period.as_millis() as u64, "auto-play timer acquired");
        Self {
            interval,
            period,
            ticks: 0,
        }
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
        self.ticks += 1;
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Ticks delivered so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Drop for AutoPlay {
    fn drop(&mut self) {
        debug!(ticks = self.ticks, "auto-play timer released");
    }
}
