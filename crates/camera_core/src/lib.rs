//! Third-person orbit camera: focus tracking, manual rotate/zoom, and
//! exponential damping of every moving part.
//!
//! Engine agnostic. Hosts feed a target position, an [`OrbitInput`] snapshot
//! and unscaled `dt` once per frame and apply the returned [`CameraPose`].

#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::float_cmp
)]

pub mod config;
pub mod controller;
pub mod damping;
pub mod focus;
pub mod input;
pub mod pose;
pub mod state;

pub use config::{ConfigError, OrbitCameraConfig};
pub use controller::{OrbitCamera, update_orbit_camera};
pub use focus::FocusTarget;
pub use input::OrbitInput;
pub use pose::CameraPose;
pub use state::OrbitCameraState;
