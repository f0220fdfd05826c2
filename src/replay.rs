//! Scenario replay: drive an orbit camera through a scripted scenario and
//! record what it did each frame.

use anyhow::Result;
use camera_core::{CameraPose, OrbitCamera, OrbitCameraConfig, OrbitCameraState};
use data_runtime::scenario::Scenario;
use glam::Vec3;
use serde::Serialize;

/// Camera output for one replayed frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub frame: u64,
    /// Accumulated unscaled time in seconds.
    pub time: f32,
    pub target: Vec3,
    pub state: OrbitCameraState,
    pub pose: CameraPose,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub frames: u64,
    pub time: f32,
    pub final_state: OrbitCameraState,
    pub final_pose: CameraPose,
    pub settled: bool,
}

/// Replay `scen` with an explicit config, calling `on_frame` after every update.
pub fn replay_with(
    scen: &Scenario,
    cfg: OrbitCameraConfig,
    mut on_frame: impl FnMut(&ReplayFrame),
) -> ReplaySummary {
    let mut cam = OrbitCamera::new(&scen.target_start(), cfg);
    let mut last_target = scen.target_start();
    let mut time = 0.0f32;
    let mut frames = 0u64;
    let mut pose = cam.pose();
    for step in scen.steps() {
        pose = cam.update(&step.target, &step.input, step.dt);
        time += step.dt;
        last_target = step.target;
        on_frame(&ReplayFrame {
            frame: frames,
            time,
            target: step.target,
            state: *cam.state(),
            pose,
        });
        frames += 1;
    }
    let summary = ReplaySummary {
        frames,
        time,
        final_state: *cam.state(),
        final_pose: pose,
        settled: cam.is_settled(&last_target),
    };
    log::info!(
        "replayed '{}': {} frames, {:.2}s, settled={}",
        scen.name,
        summary.frames,
        summary.time,
        summary.settled
    );
    summary
}

/// Replay `scen` using the config it references (or defaults).
pub fn replay(scen: &Scenario, on_frame: impl FnMut(&ReplayFrame)) -> Result<ReplaySummary> {
    let cfg = scen.camera_config()?;
    Ok(replay_with(scen, cfg, on_frame))
}

/// Replay and collect every frame.
pub fn replay_collect(scen: &Scenario) -> Result<(Vec<ReplayFrame>, ReplaySummary)> {
    let mut out = Vec::new();
    let summary = replay(scen, |f| out.push(*f))?;
    Ok((out, summary))
}
