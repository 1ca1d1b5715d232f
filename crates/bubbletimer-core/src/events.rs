use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SessionStatus;

/// Every state change in the core produces an Event.
///
/// The engine returns the event from the mutating call and also pushes it to
/// registered subscribers, so a reactive frontend never has to poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        session_id: Uuid,
        duration_secs: u64,
        label: String,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionFinished {
        /// None when the history was cleared while the session ran.
        session_id: Option<Uuid>,
        at: DateTime<Utc>,
    },
    SessionCancelled {
        /// None when the history was cleared while the session ran.
        session_id: Option<Uuid>,
        at: DateTime<Utc>,
    },
    HistoryCleared {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        running: bool,
        remaining_secs: u64,
        total_secs: u64,
        label: String,
        /// Status of the head history entry, if any session exists.
        status: Option<SessionStatus>,
        at: DateTime<Utc>,
    },
}

/// Synchronous observer invoked after each engine mutation.
pub type Subscriber = Box<dyn Fn(&Event) + Send>;
