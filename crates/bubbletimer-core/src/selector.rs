//! Pending duration configuration.
//!
//! The selector is a pure value holder: whatever minutes/seconds (or preset)
//! it carries when `start()` is called seeds the next session. It performs no
//! clamping on the bubble-pick paths; range checks live on the custom-entry
//! boundary in [`DurationSelector::set_custom`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Named shortcut configurations.
pub const PRESETS: [(&str, u32, u32); 3] = [("1m", 1, 0), ("5m", 5, 0), ("10m", 10, 0)];

/// Label applied when the user commits a hand-typed duration.
pub const CUSTOM_PRESET: &str = "Custom";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationSelector {
    minutes: u32,
    seconds: u32,
    preset: Option<String>,
}

impl Default for DurationSelector {
    fn default() -> Self {
        Self {
            minutes: 1,
            seconds: 5,
            preset: None,
        }
    }
}

impl DurationSelector {
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes,
            seconds,
            preset: None,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn preset(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    /// Picking a minute bubble clears any preset tag.
    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = minutes;
        self.preset = None;
    }

    /// Picking a second bubble clears any preset tag.
    pub fn set_seconds(&mut self, seconds: u32) {
        self.seconds = seconds;
        self.preset = None;
    }

    /// Select a named preset, committing its minute/second pair.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), ValidationError> {
        let (tag, minutes, seconds) = PRESETS
            .iter()
            .find(|(tag, _, _)| *tag == name)
            .ok_or_else(|| ValidationError::UnknownPreset(name.to_string()))?;
        self.minutes = *minutes;
        self.seconds = *seconds;
        self.preset = Some(tag.to_string());
        Ok(())
    }

    /// Commit a hand-typed duration.
    ///
    /// Rejects negative values, seconds outside 0..=59, and a zero total.
    /// On success the preset tag becomes `"Custom"`.
    pub fn set_custom(&mut self, minutes: i64, seconds: i64) -> Result<(), ValidationError> {
        if minutes < 0 || seconds < 0 {
            return Err(ValidationError::NegativeValue);
        }
        if seconds > 59 {
            return Err(ValidationError::SecondsOutOfRange);
        }
        if minutes == 0 && seconds == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        self.minutes = minutes as u32;
        self.seconds = seconds as u32;
        self.preset = Some(CUSTOM_PRESET.to_string());
        Ok(())
    }

    pub fn total_secs(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// Display label: the preset tag verbatim, else zero-padded `MM:SS`.
    pub fn label(&self) -> String {
        match &self.preset {
            Some(tag) => tag.clone(),
            None => format!("{:02}:{:02}", self.minutes, self.seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one_minute_five_seconds() {
        let selector = DurationSelector::default();
        assert_eq!(selector.minutes(), 1);
        assert_eq!(selector.seconds(), 5);
        assert!(selector.preset().is_none());
        assert_eq!(selector.total_secs(), 65);
        assert_eq!(selector.label(), "01:05");
    }

    #[test]
    fn preset_sets_values_and_label() {
        let mut selector = DurationSelector::default();
        selector.apply_preset("5m").unwrap();
        assert_eq!(selector.minutes(), 5);
        assert_eq!(selector.seconds(), 0);
        assert_eq!(selector.label(), "5m");
        assert_eq!(selector.total_secs(), 300);
    }

    #[test]
    fn unknown_preset_rejected() {
        let mut selector = DurationSelector::default();
        assert_eq!(
            selector.apply_preset("45m"),
            Err(ValidationError::UnknownPreset("45m".into()))
        );
    }

    #[test]
    fn bubble_pick_clears_preset() {
        let mut selector = DurationSelector::default();
        selector.apply_preset("10m").unwrap();
        selector.set_seconds(30);
        assert!(selector.preset().is_none());
        assert_eq!(selector.label(), "10:30");
    }

    #[test]
    fn custom_rejects_zero_total() {
        let mut selector = DurationSelector::default();
        assert_eq!(
            selector.set_custom(0, 0),
            Err(ValidationError::ZeroDuration)
        );
        // Selector untouched on rejection.
        assert_eq!(selector.total_secs(), 65);
    }

    #[test]
    fn custom_rejects_seconds_out_of_range() {
        let mut selector = DurationSelector::default();
        assert_eq!(
            selector.set_custom(1, 60),
            Err(ValidationError::SecondsOutOfRange)
        );
    }

    #[test]
    fn custom_rejects_negatives() {
        let mut selector = DurationSelector::default();
        assert_eq!(
            selector.set_custom(-1, 10),
            Err(ValidationError::NegativeValue)
        );
        assert_eq!(
            selector.set_custom(1, -10),
            Err(ValidationError::NegativeValue)
        );
    }

    #[test]
    fn custom_commit_tags_preset() {
        let mut selector = DurationSelector::default();
        selector.set_custom(2, 30).unwrap();
        assert_eq!(selector.preset(), Some("Custom"));
        assert_eq!(selector.total_secs(), 150);
        assert_eq!(selector.label(), "Custom");
    }
}
