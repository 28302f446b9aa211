//! Styled UI component builders
//!
//! Provides helper functions to create consistently styled UI components.

use super::colors::{ColorUtils, UiColors};
use super::typography::{TextSize, TextStyle};
use bevy_egui::egui;

/// How much lighter a button gets under the pointer
const HOVER_LIGHTEN: f32 = 0.15;

/// Helper functions for creating styled buttons
pub struct StyledButton;

impl StyledButton {
    /// Regular action button (green)
    pub fn action(ui: &mut egui::Ui, text: impl Into<String>, enabled: bool) -> egui::Response {
        Self::filled(ui, text, UiColors::ACTION, TextSize::BUTTON, enabled)
    }

    /// Settings button (blue)
    pub fn settings(ui: &mut egui::Ui, text: impl Into<String>) -> egui::Response {
        Self::filled(ui, text, UiColors::SETTINGS, TextSize::BUTTON, true)
    }

    /// The big spin button (orange)
    pub fn spin(ui: &mut egui::Ui, text: impl Into<String>, enabled: bool) -> egui::Response {
        Self::filled(ui, text, UiColors::SPIN, TextSize::BUTTON_LARGE, enabled)
    }

    fn filled(
        ui: &mut egui::Ui,
        text: impl Into<String>,
        fill: egui::Color32,
        size: f32,
        enabled: bool,
    ) -> egui::Response {
        let (idle, hovered) = Self::fills(fill);
        ui.scope(|ui| {
            let widgets = &mut ui.visuals_mut().widgets;
            widgets.inactive.weak_bg_fill = idle;
            widgets.hovered.weak_bg_fill = hovered;
            widgets.active.weak_bg_fill = idle;

            let button = egui::Button::new(TextStyle::button(text, size))
                .stroke(egui::Stroke::NONE)
                .corner_radius(6.0)
                .min_size(egui::vec2(140.0, size * 2.4));
            ui.add_enabled(enabled, button)
        })
        .inner
    }

    /// Idle and hover fills for a button color
    pub fn fills(fill: egui::Color32) -> (egui::Color32, egui::Color32) {
        (fill, ColorUtils::lighten(fill, HOVER_LIGHTEN))
    }
}

/// Helper functions for spacing and layout
pub struct Layout;

impl Layout {
    /// Standard spacing between sections
    pub const SECTION_SPACING: f32 = 20.0;

    /// Standard spacing between items
    pub const ITEM_SPACING: f32 = 10.0;

    /// Add section spacing
    pub fn section_space(ui: &mut egui::Ui) {
        ui.add_space(Self::SECTION_SPACING);
    }

    /// Add item spacing
    pub fn item_space(ui: &mut egui::Ui) {
        ui.add_space(Self::ITEM_SPACING);
    }
}
