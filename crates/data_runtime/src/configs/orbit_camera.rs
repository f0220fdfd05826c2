//! Orbit camera configuration loaded from data/config/orbit_camera.toml.
//!
//! Every key is optional; missing keys fall back to the controller defaults.
//! Environment variables override the file for quick tuning.

use anyhow::{Context, Result};
use camera_core::OrbitCameraConfig;
use serde::Deserialize;
use std::path::Path;

use crate::loader::data_root;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrbitCameraCfg {
    pub focus_radius: Option<f32>,
    pub focus_centering: Option<f32>,
    pub rotation_speed: Option<f32>,
    pub easing_speed: Option<f32>,
    pub zoom_speed: Option<f32>,
    pub min_pitch_deg: Option<f32>,
    pub max_pitch_deg: Option<f32>,
    pub zoom_min: Option<f32>,
    pub zoom_max: Option<f32>,
    pub initial_zoom_distance: Option<f32>,
    pub initial_pitch_deg: Option<f32>,
    pub initial_yaw_deg: Option<f32>,
}

impl OrbitCameraCfg {
    /// Fill the gaps from the controller defaults.
    #[must_use]
    pub fn resolve(&self) -> OrbitCameraConfig {
        let d = OrbitCameraConfig::default();
        let mut cfg = OrbitCameraConfig {
            focus_radius: self.focus_radius.unwrap_or(d.focus_radius),
            focus_centering: self.focus_centering.unwrap_or(d.focus_centering),
            rotation_speed: self.rotation_speed.unwrap_or(d.rotation_speed),
            easing_speed: self.easing_speed.unwrap_or(d.easing_speed),
            zoom_speed: self.zoom_speed.unwrap_or(d.zoom_speed),
            x_min_limit: self.min_pitch_deg.unwrap_or(d.x_min_limit),
            x_max_limit: self.max_pitch_deg.unwrap_or(d.x_max_limit),
            zoom_min: self.zoom_min.unwrap_or(d.zoom_min),
            zoom_max: self.zoom_max.unwrap_or(d.zoom_max),
            initial_zoom_distance: self.initial_zoom_distance.unwrap_or(d.initial_zoom_distance),
            initial_orbit_angles: d.initial_orbit_angles,
        };
        if let Some(p) = self.initial_pitch_deg {
            cfg.initial_orbit_angles.x = p;
        }
        if let Some(y) = self.initial_yaw_deg {
            cfg.initial_orbit_angles.y = y;
        }
        cfg
    }

    /// Apply `ORBIT_*` overrides looked up through `var`. Unparsable values are ignored.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let slots: [(&str, &mut Option<f32>); 9] = [
            ("ORBIT_FOCUS_RADIUS", &mut self.focus_radius),
            ("ORBIT_FOCUS_CENTERING", &mut self.focus_centering),
            ("ORBIT_ROTATION_SPEED", &mut self.rotation_speed),
            ("ORBIT_EASING_SPEED", &mut self.easing_speed),
            ("ORBIT_ZOOM_SPEED", &mut self.zoom_speed),
            ("ORBIT_MIN_PITCH_DEG", &mut self.min_pitch_deg),
            ("ORBIT_MAX_PITCH_DEG", &mut self.max_pitch_deg),
            ("ORBIT_ZOOM_MIN", &mut self.zoom_min),
            ("ORBIT_ZOOM_MAX", &mut self.zoom_max),
        ];
        for (key, slot) in slots {
            if let Some(v) = var(key).and_then(|s| s.trim().parse().ok()) {
                *slot = Some(v);
            }
        }
    }
}

/// Parse a TOML document into the raw (all-optional) config.
pub fn parse_str(txt: &str) -> Result<OrbitCameraCfg> {
    toml::from_str::<OrbitCameraCfg>(txt).context("parse orbit_camera TOML")
}

/// Read a TOML config file, apply env overrides, and resolve it.
///
/// Out-of-range values are clamped (with a warning) rather than rejected so a
/// typo in a tuning file never leaves the camera unusable.
pub fn load_from(path: &Path) -> Result<OrbitCameraConfig> {
    let mut raw = read_file(path)?;
    raw.apply_overrides(|k| std::env::var(k).ok());
    Ok(finish(&raw))
}

/// Read and resolve a TOML config file exactly as written: no env overrides,
/// no clamping. For tools that must report out-of-range values.
pub fn load_raw(path: &Path) -> Result<OrbitCameraConfig> {
    Ok(read_file(path)?.resolve())
}

fn read_file(path: &Path) -> Result<OrbitCameraCfg> {
    let txt = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_str(&txt).with_context(|| format!("in {}", path.display()))
}

/// Load `config/orbit_camera.toml` under the data root, or defaults if absent.
pub fn load_default() -> Result<OrbitCameraConfig> {
    let path = data_root().join("config/orbit_camera.toml");
    let mut raw = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        parse_str(&txt)?
    } else {
        log::debug!("{} not found; using orbit camera defaults", path.display());
        OrbitCameraCfg::default()
    };
    raw.apply_overrides(|k| std::env::var(k).ok());
    Ok(finish(&raw))
}

fn finish(raw: &OrbitCameraCfg) -> OrbitCameraConfig {
    let cfg = raw.resolve();
    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("orbit camera config: {e}; clamping into range");
            cfg.sanitized()
        }
    }
}
