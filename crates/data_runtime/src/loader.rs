//! Path resolution and raw reads under `data/`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefer the top-level workspace `data/` so tests and tools can run from any crate.
#[must_use]
pub fn data_root() -> PathBuf {
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Resolve `rel` against the data root unless it is absolute or already exists as given.
#[must_use]
pub fn resolve(rel: impl AsRef<Path>) -> PathBuf {
    let rel = rel.as_ref();
    if rel.is_absolute() || rel.exists() {
        rel.to_path_buf()
    } else {
        data_root().join(rel)
    }
}

/// Read a raw JSON file (see [`resolve`]) and return its string.
pub fn read_json(rel: impl AsRef<Path>) -> Result<String> {
    let path = resolve(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}
