//! Orbit camera tunables and their documented ranges.

use glam::Vec2;
use thiserror::Error;

/// Valid range for `focus_centering`.
pub const FOCUS_CENTERING_RANGE: (f32, f32) = (0.0, 1.0);
/// Valid range for `rotation_speed` (degrees per second).
pub const ROTATION_SPEED_RANGE: (f32, f32) = (1.0, 360.0);
/// Valid range for `easing_speed`.
pub const EASING_SPEED_RANGE: (f32, f32) = (1.0, 20.0);
/// Valid range for `zoom_speed` (distance units per scroll unit).
pub const ZOOM_SPEED_RANGE: (f32, f32) = (0.0, 20.0);

/// Orbit camera configuration.
///
/// Angles are in degrees. `initial_*` fields only seed the state at
/// activation; the rest is read every frame, so mutating them at runtime
/// takes effect on the next update.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbitCameraConfig {
    /// Leash radius around the target inside which the focus point may lag.
    pub focus_radius: f32,
    /// Base of the damping law; 0 disables damping, 1 snaps.
    pub focus_centering: f32,
    pub rotation_speed: f32,
    pub easing_speed: f32,
    pub zoom_speed: f32,
    pub x_min_limit: f32,
    pub x_max_limit: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub initial_zoom_distance: f32,
    /// (pitch, yaw)
    pub initial_orbit_angles: Vec2,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            focus_radius: 1.0,
            focus_centering: 0.75,
            rotation_speed: 90.0,
            easing_speed: 10.0,
            zoom_speed: 10.0,
            x_min_limit: -10.0,
            x_max_limit: 45.0,
            zoom_min: 1.0,
            zoom_max: 20.0,
            initial_zoom_distance: 5.0,
            initial_orbit_angles: Vec2::new(15.0, 45.0),
        }
    }
}

/// Reasons a configuration is rejected by [`OrbitCameraConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("focus_radius must be >= 0 (got {0})")]
    NegativeFocusRadius(f32),
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("pitch limits inverted: x_min_limit {min} > x_max_limit {max}")]
    InvertedPitchLimits { min: f32, max: f32 },
    #[error("zoom limits inverted: zoom_min {min} > zoom_max {max}")]
    InvertedZoomLimits { min: f32, max: f32 },
}

impl OrbitCameraConfig {
    fn fields(&self) -> [(&'static str, f32); 12] {
        [
            ("focus_radius", self.focus_radius),
            ("focus_centering", self.focus_centering),
            ("rotation_speed", self.rotation_speed),
            ("easing_speed", self.easing_speed),
            ("zoom_speed", self.zoom_speed),
            ("x_min_limit", self.x_min_limit),
            ("x_max_limit", self.x_max_limit),
            ("zoom_min", self.zoom_min),
            ("zoom_max", self.zoom_max),
            ("initial_zoom_distance", self.initial_zoom_distance),
            ("initial_orbit_angles.pitch", self.initial_orbit_angles.x),
            ("initial_orbit_angles.yaw", self.initial_orbit_angles.y),
        ]
    }

    /// Check every tunable against its documented range.
    ///
    /// The per-frame update never calls this; it is for loaders and tools
    /// that accept configuration from outside.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.focus_radius < 0.0 {
            return Err(ConfigError::NegativeFocusRadius(self.focus_radius));
        }
        let ranged = [
            ("focus_centering", self.focus_centering, FOCUS_CENTERING_RANGE),
            ("rotation_speed", self.rotation_speed, ROTATION_SPEED_RANGE),
            ("easing_speed", self.easing_speed, EASING_SPEED_RANGE),
            ("zoom_speed", self.zoom_speed, ZOOM_SPEED_RANGE),
        ];
        for (field, value, (min, max)) in ranged {
            if value < min || value > max {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        if self.x_min_limit > self.x_max_limit {
            return Err(ConfigError::InvertedPitchLimits {
                min: self.x_min_limit,
                max: self.x_max_limit,
            });
        }
        if self.zoom_min > self.zoom_max {
            return Err(ConfigError::InvertedZoomLimits {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        Ok(())
    }

    /// Clamp every finite tunable into its range and swap inverted limit pairs.
    ///
    /// Non-finite values are replaced by the default for that field.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        let clamp_range = |v: f32, fallback: f32, (min, max): (f32, f32)| {
            finite_or(v, fallback).clamp(min, max)
        };

        let (x_min_limit, x_max_limit) = ordered(
            finite_or(self.x_min_limit, d.x_min_limit),
            finite_or(self.x_max_limit, d.x_max_limit),
        );
        let (zoom_min, zoom_max) = ordered(
            finite_or(self.zoom_min, d.zoom_min),
            finite_or(self.zoom_max, d.zoom_max),
        );
        Self {
            focus_radius: finite_or(self.focus_radius, d.focus_radius).max(0.0),
            focus_centering: clamp_range(
                self.focus_centering,
                d.focus_centering,
                FOCUS_CENTERING_RANGE,
            ),
            rotation_speed: clamp_range(self.rotation_speed, d.rotation_speed, ROTATION_SPEED_RANGE),
            easing_speed: clamp_range(self.easing_speed, d.easing_speed, EASING_SPEED_RANGE),
            zoom_speed: clamp_range(self.zoom_speed, d.zoom_speed, ZOOM_SPEED_RANGE),
            x_min_limit,
            x_max_limit,
            zoom_min,
            zoom_max,
            initial_zoom_distance: finite_or(self.initial_zoom_distance, d.initial_zoom_distance),
            initial_orbit_angles: Vec2::new(
                finite_or(self.initial_orbit_angles.x, d.initial_orbit_angles.x),
                finite_or(self.initial_orbit_angles.y, d.initial_orbit_angles.y),
            ),
        }
    }

    /// Clamp a pitch value into `[x_min_limit, x_max_limit]`.
    ///
    /// Never panics: with inverted limits the max limit wins, and a NaN limit is ignored.
    #[inline]
    #[must_use]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        clamp_total(pitch, self.x_min_limit, self.x_max_limit)
    }

    /// Clamp a distance into `[zoom_min, zoom_max]`. Total like [`Self::clamp_pitch`].
    #[inline]
    #[must_use]
    pub fn clamp_zoom(&self, distance: f32) -> f32 {
        clamp_total(distance, self.zoom_min, self.zoom_max)
    }

    /// Exponential damping factor `(1 - focus_centering)^(dt * easing_speed)`.
    #[inline]
    #[must_use]
    pub fn damping_factor(&self, dt: f32) -> f32 {
        crate::damping::damping_factor(self.focus_centering, self.easing_speed, dt)
    }
}

fn clamp_total(v: f32, min: f32, max: f32) -> f32 {
    v.max(min).min(max)
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(OrbitCameraConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_zoom_limits_rejected() {
        let cfg = OrbitCameraConfig {
            zoom_min: 10.0,
            zoom_max: 2.0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvertedZoomLimits { min: 10.0, max: 2.0 })
        );
    }

    #[test]
    fn nan_is_reported_by_field() {
        let cfg = OrbitCameraConfig {
            easing_speed: f32::NAN,
            ..Default::default()
        };
        match cfg.validate() {
            Err(ConfigError::NotFinite { field, .. }) => assert_eq!(field, "easing_speed"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn sanitized_clamps_and_orders() {
        let cfg = OrbitCameraConfig {
            focus_radius: -3.0,
            focus_centering: 1.5,
            rotation_speed: 0.0,
            easing_speed: f32::INFINITY,
            x_min_limit: 60.0,
            x_max_limit: -20.0,
            ..Default::default()
        };
        let s = cfg.sanitized();
        assert_eq!(s.focus_radius, 0.0);
        assert_eq!(s.focus_centering, 1.0);
        assert_eq!(s.rotation_speed, 1.0);
        assert_eq!(s.easing_speed, 10.0);
        assert_eq!((s.x_min_limit, s.x_max_limit), (-20.0, 60.0));
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn clamps_tolerate_inverted_and_nan_limits() {
        let cfg = OrbitCameraConfig {
            x_min_limit: 30.0,
            x_max_limit: -30.0,
            zoom_min: f32::NAN,
            zoom_max: 2.0,
            ..Default::default()
        };
        assert_eq!(cfg.clamp_pitch(0.0), -30.0);
        assert_eq!(cfg.clamp_pitch(50.0), -30.0);
        assert_eq!(cfg.clamp_zoom(5.0), 2.0);
        assert_eq!(cfg.clamp_zoom(1.0), 1.0);
    }

    #[test]
    fn sanitized_is_identity_on_valid_config() {
        let cfg = OrbitCameraConfig::default();
        assert_eq!(cfg.sanitized(), cfg);
    }
}
