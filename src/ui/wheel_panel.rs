//! Main window: username bar, the wheel canvas and the spin button
//!
//! Button handlers are plain functions over resources so they can be tested
//! without an egui context; the systems below only lay out widgets and call
//! them.

use super::styles::{Layout, StyledButton, TextStyle, UiColors};
use super::system_params::WheelPanelParams;
use super::wheel_canvas::{paint_wheel, WheelArt, CANVAS_CENTER, CANVAS_SIZE};
use crate::core::{
    LabelLanguage, PlayerHandle, StatusLine, WheelSettings, MAX_SPIN_SECONDS, MIN_SPIN_SECONDS,
};
use crate::resolver::{validate_handle, FetchRequested};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Contents of the username text field
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleInput(pub String);

/// Settings window visibility and the values being edited
///
/// Edits go to `draft` and only reach [`WheelSettings`] on save.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SettingsWindow {
    pub open: bool,
    pub draft: WheelSettings,
}

impl SettingsWindow {
    pub fn open_with(&mut self, current: &WheelSettings) {
        self.draft = current.clone();
        self.open = true;
    }

    pub fn save(&mut self, settings: &mut WheelSettings) {
        *settings = self.draft.clone();
        self.open = false;
        info!(
            "[SETTINGS] Spin time {}s, labels in {}",
            settings.spin_seconds,
            settings.label_language.name()
        );
    }
}

/// "Use this username": trim, validate and remember the handle
pub fn confirm_handle(input: &str, handle: &mut PlayerHandle, status: &mut StatusLine) {
    match validate_handle(input) {
        Ok(valid) => {
            debug!("[UI] Handle set to {}", valid);
            status.set_info(format!("The wheel is ready. {valid}"));
            handle.0 = Some(valid.to_string());
        }
        Err(err) => status.set_error(err.to_string()),
    }
}

/// "Spin the wheel": a fetch request for the confirmed handle, if allowed
pub fn spin_request(
    handle: &PlayerHandle,
    busy: bool,
    status: &mut StatusLine,
) -> Option<FetchRequested> {
    if busy {
        return None;
    }
    let Some(handle) = handle.0.as_ref() else {
        status.set_error("Enter your Lichess username to turn the wheel.");
        return None;
    };
    Some(FetchRequested {
        handle: handle.clone(),
    })
}

/// Username bar, wheel canvas, result line and spin button
pub fn wheel_panel_system(
    mut contexts: EguiContexts,
    mut params: WheelPanelParams,
    mut input: ResMut<HandleInput>,
    mut settings_window: ResMut<SettingsWindow>,
    mut art: ResMut<WheelArt>,
    mut fetches: MessageWriter<FetchRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("handle_bar")
        .frame(egui::Frame::default().fill(UiColors::BG).inner_margin(egui::Margin::same(10)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(TextStyle::body("Lichess username:"));
                ui.add(egui::TextEdit::singleline(&mut input.0).desired_width(220.0));

                if StyledButton::action(ui, "Use this username", true).clicked() {
                    confirm_handle(&input.0, &mut params.handle, &mut params.status);
                }

                if StyledButton::settings(ui, "⚙ Settings").clicked() {
                    settings_window.open_with(&params.settings);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(TextStyle::status(&params.status.text, params.status.is_error));
                });
            });
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(UiColors::BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                Layout::item_space(ui);

                let (response, painter) = ui.allocate_painter(CANVAS_SIZE, egui::Sense::hover());
                painter.rect_filled(response.rect, 0.0, UiColors::CANVAS);

                let center = response.rect.min + CANVAS_CENTER;
                params.wheel.set_center(Vec2::new(center.x, center.y));

                let geometry = *params.wheel.geometry();
                if params.wheel.is_spinning() {
                    paint_wheel(
                        &painter,
                        &mut art,
                        &geometry,
                        params.wheel.markers(),
                        params.wheel.angle(),
                    );
                } else if let Some(result) = &params.outcome.result {
                    paint_wheel(&painter, &mut art, &geometry, &result.markers, result.final_angle);
                } else {
                    paint_wheel(&painter, &mut art, &geometry, &[], 0.0);
                }

                Layout::item_space(ui);
                let headline = params.outcome.headline().unwrap_or_default();
                ui.label(TextStyle::result(headline));

                Layout::item_space(ui);
                let busy = params.is_busy();
                if StyledButton::spin(ui, "Spin the wheel", !busy).clicked() {
                    if let Some(request) = spin_request(&params.handle, busy, &mut params.status) {
                        fetches.write(request);
                    }
                }

                Layout::section_space(ui);
            });
        });
}

/// Spin time slider and label language choice
pub fn settings_window_system(
    mut contexts: EguiContexts,
    mut window: ResMut<SettingsWindow>,
    mut settings: ResMut<WheelSettings>,
) {
    if !window.open {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut open = true;
    let mut save = false;
    let draft = &mut window.draft;

    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(TextStyle::body("Wheel spin time (seconds):"));
                ui.add(
                    egui::Slider::new(&mut draft.spin_seconds, MIN_SPIN_SECONDS..=MAX_SPIN_SECONDS)
                        .suffix(" s"),
                );

                Layout::item_space(ui);
                ui.label(TextStyle::body("Piece names:"));
                ui.horizontal(|ui| {
                    for language in [LabelLanguage::Turkish, LabelLanguage::English] {
                        ui.radio_value(&mut draft.label_language, language, language.name());
                    }
                });

                Layout::item_space(ui);
                save = StyledButton::action(ui, "Save", true).clicked();
            });
        });

    if save {
        window.save(&mut settings);
    } else if !open {
        window.open = false;
    }
}
