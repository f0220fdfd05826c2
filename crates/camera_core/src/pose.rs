//! Camera pose composition from orbit angles, distance and focus point.
//!
//! Convention: +Y up, +Z forward at zero yaw/pitch. Positive pitch tilts the
//! view down so the camera rises above the focus point; positive yaw turns the
//! forward axis from +Z toward +X.

use crate::state::OrbitCameraState;
use glam::{EulerRot, Quat, Vec2, Vec3};

/// Forward axis of an unrotated camera.
pub const FORWARD: Vec3 = Vec3::Z;

/// Output written to whatever owns the camera transform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    #[inline]
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Rotation for `(pitch, yaw)` degrees with zero roll: yaw about Y, then pitch about local X.
#[must_use]
pub fn orbit_rotation(angles: Vec2) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        angles.y.to_radians(),
        angles.x.to_radians(),
        0.0,
    )
}

/// Place the camera `distance` behind `focus` along the orbit forward axis.
#[must_use]
pub fn compose_pose(focus: Vec3, angles: Vec2, distance: f32) -> CameraPose {
    let rotation = orbit_rotation(angles);
    let forward = rotation * FORWARD;
    CameraPose {
        position: focus - forward * distance,
        rotation,
    }
}

/// Pose for the current smoothed state.
#[must_use]
pub fn pose_from_state(state: &OrbitCameraState) -> CameraPose {
    compose_pose(state.focus_point, state.orbit_angles, state.zoom_distance)
}
