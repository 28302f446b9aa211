//! Painting the wheel, its labels and the pointer
//!
//! The disc is drawn around the origin and translated onto the canvas, so the
//! cached shapes stay valid when the window is resized. Labels are laid out
//! every frame since their text changes from spin to spin.

use super::styles::{TextSize, UiColors};
use crate::selection::{PieceMarker, RotationCache, WheelGeometry};
use bevy::prelude::*;
use bevy_egui::egui;
use std::sync::Arc;

/// Canvas size in points (the 500 px disc area plus room for the pointer)
pub const CANVAS_SIZE: egui::Vec2 = egui::vec2(560.0, 500.0);

/// Wheel center relative to the canvas' top-left corner
pub const CANVAS_CENTER: egui::Vec2 = egui::vec2(250.0, 250.0);

/// Number of spokes painted on the disc
const SPOKES: usize = 8;

/// Pointer triangle, tip toward the wheel
const POINTER_LENGTH: f32 = 50.0;
const POINTER_HALF_WIDTH: f32 = 15.0;

/// Rendered disc shapes per angle bucket
#[derive(Resource, Default)]
pub struct WheelArt {
    pub cache: RotationCache<Vec<egui::Shape>>,
}

pub fn to_pos2(point: Vec2) -> egui::Pos2 {
    egui::pos2(point.x, point.y)
}

/// Disc, spokes and hub for one wheel angle, centered on the origin
pub fn render_wheel(radius: f32, angle: f32) -> Vec<egui::Shape> {
    let spoke = egui::Stroke::new(6.0, UiColors::WHEEL_SPOKE);
    let mut shapes = vec![
        egui::Shape::circle_filled(egui::Pos2::ZERO, radius, UiColors::WHEEL_FACE),
        egui::Shape::circle_stroke(
            egui::Pos2::ZERO,
            radius,
            egui::Stroke::new(10.0, UiColors::WHEEL_RIM),
        ),
    ];

    for i in 0..SPOKES {
        let radians = (angle + i as f32 * 360.0 / SPOKES as f32).to_radians();
        let direction = egui::vec2(radians.cos(), radians.sin());
        shapes.push(egui::Shape::line_segment(
            [egui::Pos2::ZERO + direction * radius * 0.2, egui::Pos2::ZERO + direction * radius],
            spoke,
        ));
    }

    shapes.push(egui::Shape::circle_filled(
        egui::Pos2::ZERO,
        radius * 0.2,
        UiColors::WHEEL_HUB,
    ));
    shapes
}

/// Triangle with its tip on `tip`, pointing left toward the wheel
pub fn pointer_triangle(tip: egui::Pos2) -> Vec<egui::Pos2> {
    vec![
        tip,
        tip + egui::vec2(POINTER_LENGTH, -POINTER_HALF_WIDTH),
        tip + egui::vec2(POINTER_LENGTH, POINTER_HALF_WIDTH),
    ]
}

/// Paint the full wheel scene onto `painter`
pub fn paint_wheel(
    painter: &egui::Painter,
    art: &mut WheelArt,
    geometry: &WheelGeometry,
    markers: &[PieceMarker],
    angle: f32,
) {
    let center = to_pos2(geometry.center);
    let disc: Arc<Vec<egui::Shape>> = art
        .cache
        .get_or_render(angle, |angle| render_wheel(geometry.wheel_radius, angle));

    painter.extend(disc.iter().cloned().map(|mut shape| {
        shape.translate(center.to_vec2());
        shape
    }));

    for marker in markers {
        paint_label(painter, marker, center, angle);
    }

    painter.add(egui::Shape::convex_polygon(
        pointer_triangle(to_pos2(geometry.pointer())),
        UiColors::POINTER,
        egui::Stroke::new(1.0, UiColors::POINTER_OUTLINE),
    ));
}

fn paint_label(painter: &egui::Painter, marker: &PieceMarker, center: egui::Pos2, angle: f32) {
    let galley = painter.layout_no_wrap(
        marker.label.clone(),
        egui::FontId::proportional(TextSize::LABEL),
        UiColors::LABEL,
    );
    let position = to_pos2(marker.position(Vec2::new(center.x, center.y), angle));

    // egui rotates text clockwise around its top-left corner.
    let rotation = (-marker.text_rotation(angle)).to_radians();
    let half = egui::emath::Rot2::from_angle(rotation) * (galley.size() / 2.0);

    painter.add(
        egui::epaint::TextShape::new(position - half, galley, UiColors::LABEL).with_angle(rotation),
    );
}
