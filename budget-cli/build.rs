use std::path::{Path, PathBuf};
use std::process::Command;

/// Trimmed stdout of a successful, non-empty git invocation in `repo`.
fn git(repo: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let workspace = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("..");

    // short hash, suffixed `-dirty` when the tree has local edits
    let rev = git(&workspace, &["describe", "--always", "--dirty", "--abbrev=7"])
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=BUDGET_BUILD_REV={rev}");
}
