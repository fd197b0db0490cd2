use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Summary written by `levels --out`.
#[derive(Debug, Serialize)]
pub struct LevelsReport {
    pub code_rev: String,
    pub input: String,
    pub root: u32,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub depth: usize,
    pub layer_sizes: Vec<usize>,
    pub level: Vec<Option<u32>>,
}

/// Pretty-print `value` as JSON to `path`, creating parent directories.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Build revision from `GIT_COMMIT` (compile time, then runtime), else "unknown".
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
