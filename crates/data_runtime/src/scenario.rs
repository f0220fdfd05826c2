//! Scripted camera scenarios: a target path and per-frame input, replayed
//! through the orbit camera for tuning and regression checks.

use anyhow::{Context, Result, ensure};
use camera_core::{OrbitCameraConfig, OrbitInput};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::configs::orbit_camera;
use crate::loader;

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// TOML config path (relative to `data/`); defaults when absent.
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default)]
    pub target_start: [f32; 3],
    /// Play the frame list this many times.
    #[serde(default = "one")]
    pub repeat: u32,
    pub frames: Vec<ScenarioFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFrame {
    pub dt: f32,
    /// New target position; the previous one is kept when absent.
    #[serde(default)]
    pub target: Option<[f32; 3]>,
    #[serde(default)]
    pub rotate_held: bool,
    /// (vertical, horizontal)
    #[serde(default)]
    pub rotate_axis: [f32; 2],
    #[serde(default)]
    pub scroll: f32,
    /// Consecutive frames this entry stands for.
    #[serde(default = "one")]
    pub hold: u32,
}

impl ScenarioFrame {
    #[must_use]
    pub fn input(&self) -> OrbitInput {
        OrbitInput {
            rotate_held: self.rotate_held,
            rotate_axis: Vec2::from_array(self.rotate_axis),
            scroll: self.scroll,
        }
    }
}

/// One expanded frame: target position, input and `dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    pub target: Vec3,
    pub input: OrbitInput,
    pub dt: f32,
}

impl Scenario {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.frames.is_empty(), "scenario '{}' has no frames", self.name);
        ensure!(self.repeat > 0, "scenario '{}': repeat must be >= 1", self.name);
        for (i, f) in self.frames.iter().enumerate() {
            ensure!(
                f.dt.is_finite() && f.dt >= 0.0,
                "scenario '{}' frame {i}: dt must be finite and >= 0 (got {})",
                self.name,
                f.dt
            );
            ensure!(f.hold > 0, "scenario '{}' frame {i}: hold must be >= 1", self.name);
        }
        Ok(())
    }

    #[must_use]
    pub fn target_start(&self) -> Vec3 {
        Vec3::from_array(self.target_start)
    }

    /// Total frames after `hold` and `repeat` expansion.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        let per_pass: u64 = self.frames.iter().map(|f| u64::from(f.hold)).sum();
        per_pass * u64::from(self.repeat)
    }

    /// Expand frames into per-frame steps, carrying the target forward.
    pub fn steps(&self) -> impl Iterator<Item = FrameStep> + '_ {
        let mut target = self.target_start();
        (0..self.repeat)
            .flat_map(move |_| self.frames.iter())
            .flat_map(move |f| {
                if let Some(t) = f.target {
                    target = Vec3::from_array(t);
                }
                let step = FrameStep {
                    target,
                    input: f.input(),
                    dt: f.dt,
                };
                std::iter::repeat_n(step, f.hold as usize)
            })
    }

    /// Resolve the camera config this scenario asks for.
    pub fn camera_config(&self) -> Result<OrbitCameraConfig> {
        match &self.config {
            Some(rel) => orbit_camera::load_from(&loader::resolve(rel))
                .with_context(|| format!("scenario '{}' config", self.name)),
            None => Ok(OrbitCameraConfig::default()),
        }
    }

    /// Validate the referenced config file as written, without the clamping
    /// [`Self::camera_config`] applies.
    pub fn check_config(&self) -> Result<()> {
        let Some(rel) = &self.config else {
            return Ok(());
        };
        let path = loader::resolve(rel);
        orbit_camera::load_raw(&path)?
            .validate()
            .with_context(|| format!("scenario '{}': config {} out of range", self.name, path.display()))
    }
}

/// Parse and validate a scenario from JSON text.
pub fn parse_str(txt: &str) -> Result<Scenario> {
    let scen: Scenario = serde_json::from_str(txt).context("parse scenario json")?;
    scen.validate()?;
    Ok(scen)
}

/// Load a scenario file (absolute, cwd-relative, or relative to `data/`).
pub fn load(path: impl AsRef<Path>) -> Result<Scenario> {
    let path = path.as_ref();
    let txt = loader::read_json(path)?;
    parse_str(&txt).with_context(|| format!("scenario {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCEN: &str = r#"{
        "name": "t",
        "target_start": [1, 0, 0],
        "repeat": 2,
        "frames": [
            { "dt": 0.1, "hold": 2 },
            { "dt": 0.05, "target": [3, 0, 0], "rotate_held": true, "rotate_axis": [0.0, 0.5] }
        ]
    }"#;

    #[test]
    fn expands_hold_and_repeat() {
        let s = parse_str(SCEN).expect("parse");
        assert_eq!(s.frame_count(), 6);
        let steps: Vec<_> = s.steps().collect();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].target, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(steps[2].target, Vec3::new(3.0, 0.0, 0.0));
        assert!(steps[2].input.rotate_held);
        assert_eq!(steps[2].input.rotate_axis, Vec2::new(0.0, 0.5));
        // the target carries over into the second pass
        assert_eq!(steps[3].target, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(steps[3].dt, 0.1);
    }

    #[test]
    fn rejects_negative_dt() {
        let bad = r#"{ "name": "bad", "frames": [ { "dt": -0.1 } ] }"#;
        assert!(parse_str(bad).is_err());
    }

    #[test]
    fn rejects_empty_frames() {
        assert!(parse_str(r#"{ "name": "empty", "frames": [] }"#).is_err());
    }

    #[test]
    fn no_config_means_defaults() {
        let s = parse_str(SCEN).expect("parse");
        assert_eq!(s.camera_config().expect("cfg"), OrbitCameraConfig::default());
    }
}
