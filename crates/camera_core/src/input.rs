//! Manual rotate/zoom input and how it moves the camera targets.

use crate::config::OrbitCameraConfig;
use crate::damping::{EPSILON, nearly_equal};
use crate::state::OrbitCameraState;
use glam::Vec2;

/// Input snapshot for one frame, already normalized by the host.
///
/// `rotate_axis` is laid out like the orbit angles: `x` is the vertical
/// drag delta (drives pitch), `y` the horizontal one (drives yaw).
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrbitInput {
    pub rotate_held: bool,
    pub rotate_axis: Vec2,
    pub scroll: f32,
}

impl OrbitInput {
    /// Drag with the rotate button held.
    #[must_use]
    pub fn drag(vertical: f32, horizontal: f32) -> Self {
        Self {
            rotate_held: true,
            rotate_axis: Vec2::new(vertical, horizontal),
            scroll: 0.0,
        }
    }

    /// Scroll only.
    #[must_use]
    pub fn scroll(delta: f32) -> Self {
        Self {
            scroll: delta,
            ..Self::default()
        }
    }
}

/// Advance the target orbit angles from a drag. Vertical drag lowers pitch,
/// horizontal drag raises yaw. Pitch is clamped; yaw is left unbounded.
pub fn apply_manual_rotation(
    cfg: &OrbitCameraConfig,
    state: &mut OrbitCameraState,
    input: &OrbitInput,
    dt: f32,
) {
    if !input.rotate_held {
        return;
    }
    let axis = input.rotate_axis;
    if nearly_equal(axis.x, 0.0, EPSILON) && nearly_equal(axis.y, 0.0, EPSILON) {
        return;
    }
    state.target_orbit_angles += cfg.rotation_speed * axis * Vec2::new(-1.0, 1.0) * dt.max(0.0);
    state.target_orbit_angles.x = cfg.clamp_pitch(state.target_orbit_angles.x);
}

/// Advance the target zoom distance from a scroll delta (not scaled by `dt`).
pub fn apply_manual_zoom(cfg: &OrbitCameraConfig, state: &mut OrbitCameraState, input: &OrbitInput) {
    if nearly_equal(input.scroll, 0.0, EPSILON) {
        return;
    }
    state.target_zoom_distance = cfg.clamp_zoom(state.target_zoom_distance + input.scroll * cfg.zoom_speed);
}
