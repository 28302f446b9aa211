//! Color palette for the wheel UI
//!
//! Light canvas with a green/blue/orange button set, taken from the first
//! version of the wheel. Colors are egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    // === Backgrounds ===

    /// Window background
    pub const BG: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);

    /// Wheel canvas background
    pub const CANVAS: egui::Color32 = egui::Color32::WHITE;

    // === Buttons ===

    /// Regular actions (confirm username, save)
    pub const ACTION: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);

    /// Settings button
    pub const SETTINGS: egui::Color32 = egui::Color32::from_rgb(0x21, 0x96, 0xF3);

    /// Spin button and the result highlight
    pub const SPIN: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x57, 0x22);

    // === Text ===

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);

    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(110, 110, 115);

    pub const TEXT_ON_BUTTON: egui::Color32 = egui::Color32::WHITE;

    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    // === Wheel ===

    pub const WHEEL_RIM: egui::Color32 = egui::Color32::from_rgb(92, 58, 33);

    pub const WHEEL_FACE: egui::Color32 = egui::Color32::from_rgb(196, 148, 94);

    pub const WHEEL_SPOKE: egui::Color32 = egui::Color32::from_rgb(120, 78, 45);

    pub const WHEEL_HUB: egui::Color32 = egui::Color32::from_rgb(70, 44, 25);

    pub const POINTER: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

    pub const POINTER_OUTLINE: egui::Color32 = egui::Color32::BLACK;

    pub const LABEL: egui::Color32 = egui::Color32::BLACK;
}

/// Color variations derived from the palette
pub struct ColorUtils;

impl ColorUtils {
    /// Move a color toward white by `amount` (0.0 keeps it, 1.0 is white)
    pub fn lighten(color: egui::Color32, amount: f32) -> egui::Color32 {
        let amount = amount.clamp(0.0, 1.0);
        let toward_white = |channel: u8| {
            let channel = f32::from(channel);
            (channel + (255.0 - channel) * amount).round() as u8
        };
        egui::Color32::from_rgb(
            toward_white(color.r()),
            toward_white(color.g()),
            toward_white(color.b()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_moves_toward_white() {
        let lighter = ColorUtils::lighten(UiColors::ACTION, 0.5);
        assert!(lighter.r() > UiColors::ACTION.r());
        assert!(lighter.g() > UiColors::ACTION.g());
        assert!(lighter.b() > UiColors::ACTION.b());
    }

    #[test]
    fn test_lighten_bounds() {
        assert_eq!(ColorUtils::lighten(UiColors::SPIN, 0.0), UiColors::SPIN);
        assert_eq!(
            ColorUtils::lighten(UiColors::SPIN, 2.0),
            egui::Color32::WHITE
        );
    }
}
