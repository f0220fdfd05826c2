//! Per-frame orbit camera update.
//!
//! Call once per rendered frame, after every target position for the frame
//! has been committed, with unscaled wall-clock `dt` so pausing or slowing
//! gameplay time does not freeze the camera.

use crate::config::OrbitCameraConfig;
use crate::damping::{damp_f32, damp_vec2};
use crate::focus::{FocusTarget, update_focus_point};
use crate::input::{OrbitInput, apply_manual_rotation, apply_manual_zoom};
use crate::pose::{CameraPose, pose_from_state};
use crate::state::OrbitCameraState;

/// Run one frame: focus, zoom damping, angle damping, manual rotation,
/// manual zoom, then compose the pose.
///
/// Input applied this frame only moves the targets, so it shows up in the
/// pose one frame later.
pub fn update_orbit_camera(
    cfg: &OrbitCameraConfig,
    state: &mut OrbitCameraState,
    target: &impl FocusTarget,
    input: &OrbitInput,
    dt: f32,
) -> CameraPose {
    let dt = dt.max(0.0);
    let factor = cfg.damping_factor(dt);

    state.focus_point = update_focus_point(cfg, state.focus_point, target.position(), dt);

    state.zoom_distance = cfg.clamp_zoom(damp_f32(
        state.zoom_distance,
        state.target_zoom_distance,
        factor,
    ));

    state.orbit_angles = damp_vec2(state.orbit_angles, state.target_orbit_angles, factor);
    state.orbit_angles.x = cfg.clamp_pitch(state.orbit_angles.x);

    apply_manual_rotation(cfg, state, input, dt);
    apply_manual_zoom(cfg, state, input);

    let pose = pose_from_state(state);
    log::trace!(
        "orbit camera: focus={:?} angles={:?} zoom={:.3} eye={:?}",
        state.focus_point,
        state.orbit_angles,
        state.zoom_distance,
        pose.position
    );
    pose
}

/// Orbit camera controller: owns its configuration and state for as long as
/// it is active.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    cfg: OrbitCameraConfig,
    state: OrbitCameraState,
}

impl OrbitCamera {
    /// Activate the controller on `target`.
    #[must_use]
    pub fn new(target: &impl FocusTarget, cfg: OrbitCameraConfig) -> Self {
        let state = OrbitCameraState::init(target.position(), &cfg);
        log::debug!(
            "orbit camera activated: focus={:?} angles={:?} zoom={}",
            state.focus_point,
            state.orbit_angles,
            state.zoom_distance
        );
        Self { cfg, state }
    }

    /// Advance one frame and return the pose to apply to the camera transform.
    pub fn update(&mut self, target: &impl FocusTarget, input: &OrbitInput, dt: f32) -> CameraPose {
        update_orbit_camera(&self.cfg, &mut self.state, target, input, dt)
    }

    /// Pose for the current state without advancing it.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        pose_from_state(&self.state)
    }

    #[must_use]
    pub fn config(&self) -> &OrbitCameraConfig {
        &self.cfg
    }

    /// Replace the configuration; the next update uses it. Pitch and zoom
    /// (current and target) are pulled into the new limits right away.
    pub fn set_config(&mut self, cfg: OrbitCameraConfig) {
        if cfg != self.cfg {
            log::debug!("orbit camera reconfigured: {cfg:?}");
        }
        self.cfg = cfg;
        self.state.clamp_to(&self.cfg);
    }

    #[must_use]
    pub fn state(&self) -> &OrbitCameraState {
        &self.state
    }

    /// Reseed the state as on activation, keeping the configuration.
    pub fn reset(&mut self, target: &impl FocusTarget) {
        self.state = OrbitCameraState::init(target.position(), &self.cfg);
        log::debug!("orbit camera reset: focus={:?}", self.state.focus_point);
    }

    #[must_use]
    pub fn is_settled(&self, target: &impl FocusTarget) -> bool {
        self.state.is_settled(target.position(), &self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[test]
    fn input_shows_up_one_frame_late() {
        let mut cam = OrbitCamera::new(&Vec3::ZERO, OrbitCameraConfig::default());
        let before = cam.pose();
        let p1 = cam.update(&Vec3::ZERO, &OrbitInput::drag(0.0, 1.0), 0.1);
        assert_eq!(p1, before);
        assert!(cam.state().target_orbit_angles.y > 45.0);
        let p2 = cam.update(&Vec3::ZERO, &OrbitInput::default(), 0.1);
        assert_ne!(p2, before);
    }

    #[test]
    fn set_config_reclamps_state() {
        let mut cam = OrbitCamera::new(&Vec3::ZERO, OrbitCameraConfig::default());
        cam.set_config(OrbitCameraConfig {
            x_max_limit: 10.0,
            zoom_max: 3.0,
            ..OrbitCameraConfig::default()
        });
        assert_eq!(cam.state().orbit_angles, Vec2::new(10.0, 45.0));
        assert_eq!(cam.state().target_zoom_distance, 3.0);
        assert_eq!(cam.state().zoom_distance, 3.0);
    }

    #[test]
    fn reset_refocuses_on_target() {
        let mut cam = OrbitCamera::new(&Vec3::ZERO, OrbitCameraConfig::default());
        cam.update(&Vec3::ZERO, &OrbitInput::drag(1.0, 1.0), 0.5);
        let t = Vec3::new(9.0, 0.0, 9.0);
        cam.reset(&t);
        assert_eq!(cam.state().focus_point, t);
        assert_eq!(cam.state().target_orbit_angles, Vec2::new(15.0, 45.0));
        assert!(cam.is_settled(&t));
    }

    #[test]
    fn inverted_limits_do_not_panic() {
        let inverted_pitch = OrbitCameraConfig {
            x_min_limit: 30.0,
            x_max_limit: -30.0,
            ..OrbitCameraConfig::default()
        };
        let mut cam = OrbitCamera::new(&Vec3::ZERO, inverted_pitch);
        cam.update(&Vec3::ZERO, &OrbitInput::drag(1.0, 1.0), 0.1);
        cam.update(&Vec3::ONE, &OrbitInput::default(), 0.1);
        assert_eq!(cam.state().target_orbit_angles.x, -30.0);

        cam.set_config(OrbitCameraConfig {
            zoom_min: 10.0,
            zoom_max: 2.0,
            ..OrbitCameraConfig::default()
        });
        let pose = cam.update(&Vec3::ZERO, &OrbitInput::scroll(1.0), 0.1);
        assert_eq!(cam.state().target_zoom_distance, 2.0);
        assert!(pose.position.is_finite());
    }

    #[test]
    fn negative_dt_holds_still() {
        let mut cam = OrbitCamera::new(&Vec3::ZERO, OrbitCameraConfig::default());
        let before = *cam.state();
        cam.update(&Vec3::new(0.5, 0.0, 0.0), &OrbitInput::drag(1.0, 1.0), -0.1);
        assert_eq!(cam.state().orbit_angles, before.orbit_angles);
        assert_eq!(cam.state().target_orbit_angles, before.target_orbit_angles);
        assert_eq!(cam.state().focus_point, before.focus_point);
    }
}
