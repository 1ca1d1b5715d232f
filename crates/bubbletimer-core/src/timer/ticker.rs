//! Cancellable periodic tick driver.
//!
//! Wraps a shared [`TimerEngine`] and fires `tick()` on a fixed period from
//! a tokio task. At most one tick task is ever live per `Ticker`: `start`
//! aborts the previous task before spawning a replacement, so a countdown
//! can never be double-decremented by a leaked duplicate.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::engine::TimerEngine;

/// Shared handle the ticker and its host both hold.
pub type SharedEngine = Arc<Mutex<TimerEngine>>;

pub struct Ticker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Ticker with the standard 1-second period.
    pub fn new() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    /// Ticker with a custom period (short periods keep tests fast).
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    /// Begin ticking the engine. Cancels any previously scheduled task
    /// first, then spawns one that runs until the engine stops running.
    pub fn start(&mut self, engine: SharedEngine) {
        self.stop();
        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick fires immediately; skip it so the
            // countdown loses nothing on start.
            interval.tick().await;
            loop {
                interval.tick().await;
                let still_running = match engine.lock() {
                    Ok(mut engine) => {
                        engine.tick();
                        engine.running()
                    }
                    Err(_) => false,
                };
                if !still_running {
                    break;
                }
            }
        }));
    }

    /// Abort the scheduled task, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a tick task has been spawned and has not yet exited.
    pub fn is_scheduled(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
