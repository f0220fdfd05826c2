//! Exponential damping shared by focus, zoom and orbit angles.
//!
//! Every smoothed value moves as
//! `current = lerp(target, current, (1 - centering)^(dt * easing))`,
//! which is frame-rate independent: two half steps land where one full step does.

use glam::{Vec2, Vec3};

/// Dead zone for input axes and the settle threshold for zoom and angles.
pub const EPSILON: f32 = 0.001;
/// Distance below which the focus point stops centering on the target.
pub const FOCUS_EPSILON: f32 = 0.01;

/// True when `a` and `b` differ by at most `epsilon`.
#[inline]
#[must_use]
pub fn nearly_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Component-wise [`nearly_equal`] for angle pairs.
#[inline]
#[must_use]
pub fn nearly_equal_vec2(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    nearly_equal(a.x, b.x, epsilon) && nearly_equal(a.y, b.y, epsilon)
}

/// `(1 - centering)^(dt * easing)`; `dt` below zero is treated as zero.
///
/// Returns 1 (hold) at `dt == 0` and tends to 0 (snap) as `dt` grows.
#[inline]
#[must_use]
pub fn damping_factor(centering: f32, easing: f32, dt: f32) -> f32 {
    (1.0 - centering).powf(dt.max(0.0) * easing)
}

/// Move `current` toward `target` keeping `factor` of the remaining gap.
/// No-op once the gap is within [`EPSILON`].
#[inline]
#[must_use]
pub fn damp_f32(current: f32, target: f32, factor: f32) -> f32 {
    if nearly_equal(current, target, EPSILON) {
        current
    } else {
        target + (current - target) * factor
    }
}

/// Angle pair version of [`damp_f32`]. Both components move together as soon
/// as either one is outside the dead zone.
#[inline]
#[must_use]
pub fn damp_vec2(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    if nearly_equal_vec2(current, target, EPSILON) {
        current
    } else {
        target.lerp(current, factor)
    }
}

/// Unconditional point damping; callers decide when it applies.
#[inline]
#[must_use]
pub fn damp_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    target.lerp(current, factor)
}
