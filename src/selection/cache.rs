//! Rotated-wheel render cache
//!
//! Rendering the wheel at an arbitrary angle is comparatively costly, so
//! renders are cached per 10° bucket. Only renders made within
//! [`CACHE_TOLERANCE`] of an exact bucket boundary are stored, which keeps the
//! cache at one entry per bucket no matter how long the app runs.

use std::collections::HashMap;
use std::sync::Arc;

/// Width of one cache bucket in degrees
pub const BUCKET_DEGREES: f32 = 10.0;

/// How close to a bucket boundary an angle must be for its render to be kept
pub const CACHE_TOLERANCE: f32 = 0.1;

/// Bucket key for an angle: the angle floored to a multiple of 10°
pub fn bucket_key(angle: f32) -> i32 {
    ((angle / BUCKET_DEGREES).floor() as i32) * BUCKET_DEGREES as i32
}

/// Cache of renders keyed by [`bucket_key`]
#[derive(Debug)]
pub struct RotationCache<T> {
    entries: HashMap<i32, Arc<T>>,
}

impl<T> Default for RotationCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> RotationCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached render for `angle`'s bucket, or render a fresh one
    ///
    /// A fresh render is stored only when `angle` sits within tolerance of
    /// the bucket boundary.
    pub fn get_or_render(&mut self, angle: f32, render: impl FnOnce(f32) -> T) -> Arc<T> {
        let key = bucket_key(angle);
        if let Some(hit) = self.entries.get(&key) {
            return Arc::clone(hit);
        }

        let rendered = Arc::new(render(angle));
        if angle.rem_euclid(BUCKET_DEGREES) < CACHE_TOLERANCE {
            self.entries.insert(key, Arc::clone(&rendered));
        }
        rendered
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
