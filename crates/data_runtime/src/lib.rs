//! data_runtime: data schemas and loaders for the orbit camera.
//!
//! Camera tuning lives in TOML under `data/config/`; scripted replay
//! scenarios live in JSON under `data/scenarios/`.

pub mod loader;
pub mod scenario;
pub mod configs {
    pub mod orbit_camera;
}
