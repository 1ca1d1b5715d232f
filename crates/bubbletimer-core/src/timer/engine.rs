//! Timer engine implementation.
//!
//! The engine is a tick-counting state machine. It does not schedule its own
//! ticks - the caller (or a [`Ticker`](super::Ticker)) invokes `tick()` once
//! per period and the engine decrements an integer counter. Elapsed time is
//! never re-derived from wall-clock deltas, so the countdown drifts under
//! system sleep; that trade is accepted.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active -> (Paused <-> Active | Finished | Cancelled) -> start-ready
//! ```
//!
//! Every mutating call persists the history synchronously, returns
//! `Some(Event)` on success and `None` when the guard refuses it, and pushes
//! the event to subscribers.

use chrono::Utc;

use crate::events::{Event, Subscriber};
use crate::history::HistoryStore;
use crate::selector::DurationSelector;
use crate::session::{SessionStatus, TimerSession};

/// Serializable engine snapshot.
///
/// Captures the selector plus the countdown fields so a host can park the
/// engine in the key-value store and revive it later. History is not part of
/// the snapshot; it lives under its own key.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngineState {
    pub selector: DurationSelector,
    pub total_secs: u64,
    pub remaining_secs: u64,
    pub running: bool,
}

/// Core timer engine.
///
/// Owns the pending configuration and the single current countdown, and
/// holds the injected [`HistoryStore`] so status transitions land on the
/// head history entry.
pub struct TimerEngine {
    selector: DurationSelector,
    /// Duration committed at session start; 0 when idle.
    total_secs: u64,
    /// Seconds left; floored at 0.
    remaining_secs: u64,
    /// True exactly while a periodic tick should be scheduled.
    running: bool,
    history: HistoryStore,
    subscribers: Vec<Subscriber>,
}

impl TimerEngine {
    /// Create an idle engine over the given history store.
    pub fn new(history: HistoryStore) -> Self {
        Self {
            selector: DurationSelector::default(),
            total_secs: 0,
            remaining_secs: 0,
            running: false,
            history,
            subscribers: Vec::new(),
        }
    }

    /// Revive an engine from a parked [`EngineState`].
    pub fn restore(state: EngineState, history: HistoryStore) -> Self {
        Self {
            selector: state.selector,
            total_secs: state.total_secs,
            remaining_secs: state.remaining_secs,
            running: state.running,
            history,
            subscribers: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn selector(&self) -> &DurationSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut DurationSelector {
        &mut self.selector
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// True while a session is Active or Paused.
    pub fn session_in_progress(&self) -> bool {
        self.running || self.remaining_secs > 0
    }

    pub fn state(&self) -> EngineState {
        EngineState {
            selector: self.selector.clone(),
            total_secs: self.total_secs,
            remaining_secs: self.remaining_secs,
            running: self.running,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs,
            label: self.selector.label(),
            status: self.history.head().map(|s| s.status),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a new session from the selector's pending configuration.
    ///
    /// Guarded no-op while a session is in progress or when the selected
    /// duration is zero. Appends a new Active head entry to the history.
    pub fn start(&mut self) -> Option<Event> {
        if self.session_in_progress() {
            return None;
        }
        let total = self.selector.total_secs();
        if total == 0 {
            return None;
        }
        self.total_secs = total;
        self.remaining_secs = total;
        self.running = true;

        let session = TimerSession::start_now(total, self.selector.label());
        let event = Event::SessionStarted {
            session_id: session.id,
            duration_secs: total,
            label: session.label.clone(),
            at: Utc::now(),
        };
        self.history.append(session);
        self.emit(&event);
        Some(event)
    }

    /// One countdown step. Call once per period while running.
    ///
    /// Returns `Some(Event::SessionFinished)` on the tick that exhausts the
    /// countdown; the counter never goes below zero and Finished is marked
    /// exactly once.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        if self.remaining_secs > 0 {
            return None;
        }
        self.running = false;
        // The head may be gone if the history was cleared mid-session; the
        // stop still happens and is still emitted, just without an id.
        let event = Event::SessionFinished {
            session_id: self.history.head().map(|s| s.id),
            at: Utc::now(),
        };
        self.history.update_head_status(SessionStatus::Finished);
        self.emit(&event);
        Some(event)
    }

    /// Freeze the countdown. Valid only while running.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.history.update_head_status(SessionStatus::Paused);
        let event = Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        };
        self.emit(&event);
        Some(event)
    }

    /// Continue a paused countdown from its current remaining time.
    pub fn resume(&mut self) -> Option<Event> {
        if self.running || self.remaining_secs == 0 {
            return None;
        }
        self.running = true;
        self.history.update_head_status(SessionStatus::Active);
        let event = Event::TimerResumed {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        };
        self.emit(&event);
        Some(event)
    }

    /// Abort the session in progress (Active or Paused).
    pub fn cancel(&mut self) -> Option<Event> {
        if !self.session_in_progress() {
            return None;
        }
        let session_id = self.history.head().map(|s| s.id);
        self.running = false;
        self.remaining_secs = 0;
        self.total_secs = 0;
        let event = Event::SessionCancelled {
            session_id,
            at: Utc::now(),
        };
        self.history.update_head_status(SessionStatus::Cancelled);
        self.emit(&event);
        Some(event)
    }

    /// Empty the history, in memory and on disk.
    pub fn clear_history(&mut self) -> Event {
        self.history.clear();
        let event = Event::HistoryCleared { at: Utc::now() };
        self.emit(&event);
        event
    }

    /// Register a synchronous observer for every subsequent mutation.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    fn emit(&self, event: &Event) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}
