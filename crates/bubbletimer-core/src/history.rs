//! Ordered session history with a single mutable head slot.
//!
//! The log is most-recent-first: new sessions are inserted at index 0 and
//! only the head entry's status is ever mutated. The full list is serialized
//! to the backing [`Storage`] after every mutation; there is no batching and
//! no schema versioning, the last full write wins.
//!
//! Persistence is fail-soft in both directions. A missing or corrupt blob
//! loads as an empty history, individual records that don't parse (unknown
//! status tag, malformed fields) are skipped, and write failures are dropped.

use crate::session::{SessionStatus, TimerSession};
use crate::storage::Storage;

/// Fixed key in the key-value store holding the serialized session list.
pub const HISTORY_KEY: &str = "session_history";

pub struct HistoryStore {
    sessions: Vec<TimerSession>,
    storage: Box<dyn Storage>,
}

impl HistoryStore {
    /// Create a store over the given backend, loading whatever history it
    /// already holds.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let sessions = load_sessions(storage.as_ref());
        Self { sessions, storage }
    }

    pub fn sessions(&self) -> &[TimerSession] {
        &self.sessions
    }

    /// Most recent `limit` sessions, for display.
    pub fn recent(&self, limit: usize) -> &[TimerSession] {
        &self.sessions[..self.sessions.len().min(limit)]
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn head(&self) -> Option<&TimerSession> {
        self.sessions.first()
    }

    /// Insert at the front and persist.
    pub fn append(&mut self, session: TimerSession) {
        self.sessions.insert(0, session);
        self.persist();
    }

    /// Mutate the head entry's status and persist.
    ///
    /// No-op when the history is empty or the transition policy refuses the
    /// move (terminal head, self-transition). Returns whether a mutation
    /// happened.
    pub fn update_head_status(&mut self, status: SessionStatus) -> bool {
        let Some(head) = self.sessions.first_mut() else {
            return false;
        };
        if !head.status.can_transition_to(status) {
            return false;
        }
        head.status = status;
        self.persist();
        true
    }

    /// Empty the in-memory list and remove the persisted record.
    pub fn clear(&mut self) {
        self.sessions.clear();
        let _ = self.storage.remove(HISTORY_KEY);
    }

    /// Serialize the whole ordered list under [`HISTORY_KEY`].
    ///
    /// Write failures are dropped, history durability is best-effort.
    pub fn persist(&self) {
        if let Ok(json) = serde_json::to_string(&self.sessions) {
            let _ = self.storage.set(HISTORY_KEY, &json);
        }
    }
}

fn load_sessions(storage: &dyn Storage) -> Vec<TimerSession> {
    let Ok(Some(json)) = storage.get(HISTORY_KEY) else {
        return Vec::new();
    };
    let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(&json) else {
        return Vec::new();
    };
    // Record-by-record so one bad entry doesn't drop the whole list.
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}
