use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orbitcam::data::{configs::orbit_camera, scenario};
use orbitcam::replay;

#[derive(Parser, Debug)]
#[command(name = "orbitcam")]
#[command(about = "Replay scripted orbit camera scenarios and print the resulting poses")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Replay a scenario and print one JSON line per frame, then a summary line
    Replay {
        /// Scenario JSON (absolute, cwd-relative, or relative to data/)
        scenario: PathBuf,
        /// Use this TOML config instead of the one the scenario names
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print only every Nth frame (0 prints the summary only)
        #[arg(long, default_value_t = 1)]
        every: u64,
    },
    /// Print the resolved camera config (shipped TOML + ORBIT_* overrides)
    Config,
}

fn main() -> Result<()> {
    // Info by default; RUST_LOG overrides.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Replay {
            scenario,
            config,
            every,
        } => run_replay(&scenario, config.as_deref(), every),
        Cmd::Config => {
            let cfg = orbit_camera::load_default()?;
            println!("{cfg:#?}");
            Ok(())
        }
    }
}

fn run_replay(path: &std::path::Path, config: Option<&std::path::Path>, every: u64) -> Result<()> {
    let scen = scenario::load(path)?;
    let cfg = match config {
        Some(p) => orbit_camera::load_from(p)?,
        None => scen.camera_config()?,
    };
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_err = None;
    let summary = replay::replay_with(&scen, cfg, |f| {
        if write_err.is_some() || every == 0 || f.frame % every != 0 {
            return;
        }
        let line = serde_json::to_string(f).map_err(anyhow::Error::from);
        if let Err(e) = line.and_then(|l| writeln!(out, "{l}").map_err(anyhow::Error::from)) {
            write_err = Some(e);
        }
    });
    if let Some(e) = write_err {
        return Err(e).context("write replay frame");
    }
    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    out.flush()?;
    Ok(())
}
