//! Spin easing curve
//!
//! The first 70% of the spin runs at constant speed. The last 30% is a quintic
//! ease-out, so the wheel visibly slows down before landing.

/// Fraction of the spin spent at constant speed
pub const LINEAR_PHASE: f32 = 0.7;

/// Map spin progress (elapsed / duration) to rotation progress
///
/// Input outside `[0, 1]` is clamped.
pub fn ease_spin(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    if progress < LINEAR_PHASE {
        progress
    } else {
        let tail = 1.0 - LINEAR_PHASE;
        let p = (progress - LINEAR_PHASE) / tail;
        LINEAR_PHASE + tail * (1.0 - (1.0 - p).powi(5))
    }
}
