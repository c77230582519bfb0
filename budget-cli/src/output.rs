use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Create the output directory if absent. Run before any table is written.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        bail!("output path is not a directory: {}", dir.display());
    }
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(())
}
