//! Core resources for application-wide state
//!
//! These resources are shared by the resolver, the wheel and the UI.

use crate::selection::LabelTable;
use bevy::prelude::*;
use std::time::Duration;

/// Shortest spin the settings window allows, in seconds
pub const MIN_SPIN_SECONDS: u8 = 1;

/// Longest spin the settings window allows, in seconds
pub const MAX_SPIN_SECONDS: u8 = 10;

/// Resource tracking settings that can be changed from the settings window
///
/// Held in memory only; every launch starts from [`WheelSettings::default`].
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct WheelSettings {
    /// How long one spin lasts, in whole seconds (1 to 10)
    pub spin_seconds: u8,

    /// Language of the piece labels written around the wheel
    pub label_language: LabelLanguage,

    /// Whether the same piece type may appear on the wheel more than once.
    ///
    /// Currently has no effect: labels are always deduplicated.
    pub allow_duplicate_labels: bool,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            spin_seconds: 5,
            label_language: LabelLanguage::Turkish,
            allow_duplicate_labels: true,
        }
    }
}

impl WheelSettings {
    /// Spin duration, clamped to the range the settings window offers
    pub fn spin_duration(&self) -> Duration {
        let seconds = self.spin_seconds.clamp(MIN_SPIN_SECONDS, MAX_SPIN_SECONDS);
        Duration::from_secs(u64::from(seconds))
    }

    /// Label table for the selected language
    pub fn labels(&self) -> LabelTable {
        self.label_language.labels()
    }
}

/// Languages the piece labels ship in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum LabelLanguage {
    #[default]
    Turkish,
    English,
}

impl LabelLanguage {
    pub fn name(&self) -> &'static str {
        match self {
            LabelLanguage::Turkish => "Türkçe",
            LabelLanguage::English => "English",
        }
    }

    pub fn labels(&self) -> LabelTable {
        match self {
            LabelLanguage::Turkish => LabelTable::turkish(),
            LabelLanguage::English => LabelTable::english(),
        }
    }
}

/// Handle the player confirmed in the username field
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerHandle(pub Option<String>);

/// Human-readable status text shown in the top bar
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::info("Enter your Lichess username and press 'Use this username'.")
    }
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        *self = Self::info(text);
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        *self = Self::error(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_settings_default() {
        //! Defaults match the original five second spin
        let settings = WheelSettings::default();
        assert_eq!(settings.spin_seconds, 5);
        assert_eq!(settings.spin_duration(), Duration::from_secs(5));
        assert_eq!(settings.label_language, LabelLanguage::Turkish);
    }

    #[test]
    fn test_spin_duration_is_clamped() {
        //! Out-of-range values never produce a zero or overlong spin
        let mut settings = WheelSettings::default();
        settings.spin_seconds = 0;
        assert_eq!(settings.spin_duration(), Duration::from_secs(1));
        settings.spin_seconds = 42;
        assert_eq!(settings.spin_duration(), Duration::from_secs(10));
    }

    #[test]
    fn test_label_language_switches_table() {
        let mut settings = WheelSettings::default();
        assert_eq!(settings.labels().king, "Şah");
        settings.label_language = LabelLanguage::English;
        assert_eq!(settings.labels().king, "King");
    }

    #[test]
    fn test_status_line_error_flag() {
        let mut status = StatusLine::default();
        assert!(!status.is_error);
        status.set_error("boom");
        assert!(status.is_error);
        assert_eq!(status.text, "boom");
        status.set_info("ok");
        assert!(!status.is_error);
    }
}
