//! Persistent per-controller camera state.

use crate::config::OrbitCameraConfig;
use crate::damping::{EPSILON, FOCUS_EPSILON, nearly_equal, nearly_equal_vec2};
use glam::{Vec2, Vec3};

/// Smoothed values plus the targets manual input drives them toward.
///
/// Angle pairs are `(pitch, yaw)` in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbitCameraState {
    pub focus_point: Vec3,
    pub orbit_angles: Vec2,
    pub target_orbit_angles: Vec2,
    pub zoom_distance: f32,
    pub target_zoom_distance: f32,
}

impl OrbitCameraState {
    /// Seed state at activation: focus on the target, targets equal to the
    /// initial values, pitch and zoom clamped into the configured limits.
    #[must_use]
    pub fn init(target: Vec3, cfg: &OrbitCameraConfig) -> Self {
        let angles = Vec2::new(
            cfg.clamp_pitch(cfg.initial_orbit_angles.x),
            cfg.initial_orbit_angles.y,
        );
        let zoom = cfg.clamp_zoom(cfg.initial_zoom_distance);
        Self {
            focus_point: target,
            orbit_angles: angles,
            target_orbit_angles: angles,
            zoom_distance: zoom,
            target_zoom_distance: zoom,
        }
    }

    #[inline]
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.orbit_angles.x
    }

    #[inline]
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.orbit_angles.y
    }

    /// Pull current and target pitch/zoom back inside the limits of `cfg`.
    /// Used after the configuration changes at runtime.
    pub fn clamp_to(&mut self, cfg: &OrbitCameraConfig) {
        self.orbit_angles.x = cfg.clamp_pitch(self.orbit_angles.x);
        self.target_orbit_angles.x = cfg.clamp_pitch(self.target_orbit_angles.x);
        self.zoom_distance = cfg.clamp_zoom(self.zoom_distance);
        self.target_zoom_distance = cfg.clamp_zoom(self.target_zoom_distance);
    }

    /// True when a zero-input update against `target` would leave every field as is.
    #[must_use]
    pub fn is_settled(&self, target: Vec3, cfg: &OrbitCameraConfig) -> bool {
        let focus_settled = if cfg.focus_radius <= 0.0 {
            self.focus_point == target
        } else {
            let d = target.distance(self.focus_point);
            d <= cfg.focus_radius && (d <= FOCUS_EPSILON || cfg.focus_centering <= 0.0)
        };
        focus_settled
            && nearly_equal(self.zoom_distance, self.target_zoom_distance, EPSILON)
            && nearly_equal_vec2(self.orbit_angles, self.target_orbit_angles, EPSILON)
    }
}
