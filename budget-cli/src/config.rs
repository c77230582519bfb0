use anyhow::{Context, Result, bail};
use budget_ingest::ColumnNames;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "budget.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsSection,
    pub columns: ColumnNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            input: PathBuf::from("raw").join("budget.csv"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Config {
    /// Apply command-line path overrides.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(p) = input {
            self.paths.input = p;
        }
        if let Some(d) = output_dir {
            self.paths.output_dir = d;
        }
        self
    }
}

/// Explicit `--config` must exist; otherwise `./budget.toml` is used when present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(p) if !p.exists() => bail!("config not found: {}", p.display()),
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let s = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
