//! Session records and the status transition policy.
//!
//! A [`TimerSession`] is one countdown attempt, recorded in the history log
//! at the moment it starts. Everything except `status` is fixed at creation;
//! `status` may only change on the head (most recent) entry, and only along
//! the transitions [`SessionStatus::can_transition_to`] allows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
    Finished,
    Cancelled,
}

impl SessionStatus {
    /// Whether a session in this status may move to `next`.
    ///
    /// Finished and Cancelled are terminal; self-transitions are refused.
    pub fn can_transition_to(self, next: SessionStatus) -> bool {
        use SessionStatus::*;
        match (self, next) {
            (Active, Paused) | (Active, Finished) | (Active, Cancelled) => true,
            (Paused, Active) | (Paused, Cancelled) => true,
            _ => false,
        }
    }

    /// True for Finished and Cancelled.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Finished | SessionStatus::Cancelled)
    }
}

/// One history entry.
///
/// Field names in the persisted JSON are `id`, `duration`, `date`, `status`,
/// `label`; duration is seconds with fractions allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSession {
    pub id: Uuid,
    #[serde(rename = "duration")]
    pub duration_secs: f64,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub status: SessionStatus,
    pub label: String,
}

impl TimerSession {
    /// Create a new Active session for the given duration and display label.
    pub fn start_now(duration_secs: u64, label: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            duration_secs: duration_secs as f64,
            created_at: Utc::now(),
            status: SessionStatus::Active,
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_can_pause_finish_cancel() {
        assert!(SessionStatus::Active.can_transition_to(SessionStatus::Paused));
        assert!(SessionStatus::Active.can_transition_to(SessionStatus::Finished));
        assert!(SessionStatus::Active.can_transition_to(SessionStatus::Cancelled));
    }

    #[test]
    fn paused_can_resume_or_cancel_only() {
        assert!(SessionStatus::Paused.can_transition_to(SessionStatus::Active));
        assert!(SessionStatus::Paused.can_transition_to(SessionStatus::Cancelled));
        assert!(!SessionStatus::Paused.can_transition_to(SessionStatus::Finished));
    }

    #[test]
    fn terminal_states_are_frozen() {
        for next in [
            SessionStatus::Active,
            SessionStatus::Paused,
            SessionStatus::Finished,
            SessionStatus::Cancelled,
        ] {
            assert!(!SessionStatus::Finished.can_transition_to(next));
            assert!(!SessionStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn no_self_transitions() {
        assert!(!SessionStatus::Active.can_transition_to(SessionStatus::Active));
        assert!(!SessionStatus::Paused.can_transition_to(SessionStatus::Paused));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let session = TimerSession::start_now(65, "01:05".into());
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["duration"], 65.0);
        assert_eq!(json["status"], "active");
        assert!(json["date"].is_string());
        assert_eq!(json["label"], "01:05");
    }

    #[test]
    fn status_round_trips_lowercase_tags() {
        for (status, tag) in [
            (SessionStatus::Active, "\"active\""),
            (SessionStatus::Paused, "\"paused\""),
            (SessionStatus::Finished, "\"finished\""),
            (SessionStatus::Cancelled, "\"cancelled\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), tag);
            let back: SessionStatus = serde_json::from_str(tag).unwrap();
            assert_eq!(back, status);
        }
    }
}
