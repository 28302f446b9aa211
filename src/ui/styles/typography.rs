//! Typography for the wheel UI

use super::colors::UiColors;
use bevy_egui::egui;

/// Text size presets
pub struct TextSize;

impl TextSize {
    /// Result line under the wheel
    pub const RESULT: f32 = 24.0;

    /// Piece labels around the wheel
    pub const LABEL: f32 = 16.0;

    /// Button captions
    pub const BUTTON: f32 = 16.0;

    /// Spin button caption
    pub const BUTTON_LARGE: f32 = 18.0;

    pub const BODY: f32 = 15.0;
}

/// Helper functions for creating styled text
pub struct TextStyle;

impl TextStyle {
    pub fn body(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::BODY)
            .color(UiColors::TEXT_PRIMARY)
    }

    /// Status line text; errors are drawn in red
    pub fn status(text: impl Into<String>, is_error: bool) -> egui::RichText {
        let color = if is_error {
            UiColors::DANGER
        } else {
            UiColors::TEXT_MUTED
        };
        egui::RichText::new(text).size(TextSize::BODY).color(color)
    }

    pub fn result(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::RESULT)
            .color(UiColors::SPIN)
            .strong()
    }

    pub fn button(text: impl Into<String>, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .color(UiColors::TEXT_ON_BUTTON)
            .strong()
    }
}
