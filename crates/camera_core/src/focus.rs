//! Focus point tracking: a soft leash around the target plus a centering pull.

use crate::config::OrbitCameraConfig;
use crate::damping::{FOCUS_EPSILON, damp_vec3};
use glam::Vec3;

/// Anything the camera can follow. Polled once per frame, never mutated.
pub trait FocusTarget {
    fn position(&self) -> Vec3;
}

impl FocusTarget for Vec3 {
    #[inline]
    fn position(&self) -> Vec3 {
        *self
    }
}

impl FocusTarget for [f32; 3] {
    #[inline]
    fn position(&self) -> Vec3 {
        Vec3::from_array(*self)
    }
}

impl<T: FocusTarget + ?Sized> FocusTarget for &T {
    #[inline]
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

/// Pull `focus` toward `target` just far enough to sit on the leash radius.
///
/// Leaves `focus` untouched when it is already inside `radius` (or when the
/// two points coincide).
#[must_use]
pub fn clamp_to_focus_radius(focus: Vec3, target: Vec3, radius: f32) -> Vec3 {
    let distance = target.distance(focus);
    if distance > radius && distance > 0.0 {
        target.lerp(focus, radius / distance)
    } else {
        focus
    }
}

/// Advance the focus point one frame toward `target`.
#[must_use]
pub fn update_focus_point(cfg: &OrbitCameraConfig, focus: Vec3, target: Vec3, dt: f32) -> Vec3 {
    if cfg.focus_radius <= 0.0 {
        return target;
    }
    // Both steps key off the gap measured before the leash pulls in.
    let distance = target.distance(focus);
    let mut focus = clamp_to_focus_radius(focus, target, cfg.focus_radius);
    if distance > FOCUS_EPSILON && cfg.focus_centering > 0.0 {
        focus = damp_vec3(focus, target, cfg.damping_factor(dt));
    }
    focus
}
