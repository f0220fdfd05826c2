// Root facade: re-exports for workspace crates plus the scenario replay used by the bin.
pub use camera_core as camera;
pub use data_runtime as data;
pub mod replay;
