//! Cancellable repeating tick task
//!
//! `Ticker` runs a tokio interval in a background task and forwards each
//! period as a `Tick` over a channel. Every `start()` opens a new
//! generation; `next_tick()` drops ticks from earlier generations, so a tick
//! that was already queued when `stop()` ran never reaches the engine.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// One elapsed period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

pub struct Ticker {
    period: Duration,
    generation: u64,
    task: Option<JoinHandle<()>>,
    tx: mpsc::Sender<Tick>,
    rx: mpsc::Receiver<Tick>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            period,
            generation: 0,
            task: None,
            tx,
            rx,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Begin ticking; the first tick arrives one period from now.
    /// Restarts cleanly if already running. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        self.stop();

        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Tick { generation }).await.is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, period_ms = period.as_millis() as u64, "Ticker started");
    }

    /// Cancel the tick task and invalidate queued ticks. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
            tracing::debug!(generation = self.generation, "Ticker stopped");
        }
        self.generation += 1;
    }

    /// Wait for the next tick of the current generation.
    ///
    /// Pends forever while stopped; guard select branches with `is_running()`.
    pub async fn next_tick(&mut self) -> Tick {
        loop {
            // The sender half lives in self, so the channel never closes
            let Some(tick) = self.rx.recv().await else {
                std::future::pending::<()>().await;
                continue;
            };
            if self.task.is_some() && tick.generation == self.generation {
                return tick;
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let started = tokio::time::Instant::now();
        ticker.start();

        ticker.next_tick().await;
        ticker.next_tick().await;
        ticker.next_tick().await;

        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_discards_queued_ticks() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.start();
        // Let several ticks queue up without consuming them
        tokio::time::sleep(Duration::from_millis(350)).await;
        ticker.stop();
        assert!(!ticker.is_running());

        let waited = tokio::time::timeout(Duration::from_secs(5), ticker.next_tick()).await;
        assert!(waited.is_err(), "stale tick delivered after stop");
    }

    #[tokio::test(start_paused = true)]
    async fn restart_begins_new_generation() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.start();
        tokio::time::sleep(Duration::from_millis(250)).await;

        ticker.start();
        let restarted = tokio::time::Instant::now();
        ticker.next_tick().await;

        assert_eq!(restarted.elapsed(), Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_idempotent() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.stop();
        ticker.start();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }
}
