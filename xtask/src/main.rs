use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(author, version, about = "Workspace automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// fmt + clippy -D warnings + tests + schema check (workspace)
    Ci,
    /// Validate camera config and scenarios under data/ against serde models
    SchemaCheck,
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawn")?;
    if !status.success() {
        bail!("command failed: {:?}", cmd);
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let mut c = Command::new("cargo");
    c.args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&mut c)
}

fn ci() -> Result<()> {
    cargo(&["fmt", "--all"])?;
    cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["test", "--workspace"])?;
    schema_check()?;
    Ok(())
}

fn schema_check() -> Result<()> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");

    // Config must parse with no unknown keys and already be inside every range.
    let cfg_path = root.join("data/config/orbit_camera.toml");
    let txt = std::fs::read_to_string(&cfg_path)
        .with_context(|| format!("read {}", cfg_path.display()))?;
    let cfg = data_runtime::configs::orbit_camera::parse_str(&txt)
        .with_context(|| format!("validate {}", cfg_path.display()))?
        .resolve();
    cfg.validate()
        .with_context(|| format!("out of range: {}", cfg_path.display()))?;

    let scen_dir = root.join("data/scenarios");
    let mut count = 0usize;
    if scen_dir.is_dir() {
        for entry in std::fs::read_dir(&scen_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let scen = data_runtime::scenario::load(&path)
                .with_context(|| format!("validate scenario: {}", path.display()))?;
            scen.check_config()
                .with_context(|| format!("validate scenario config: {}", path.display()))?;
            count += 1;
        }
    }
    println!("xtask: config ok, {count} scenarios validated");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ci => ci(),
        Cmd::SchemaCheck => schema_check(),
    }
}
