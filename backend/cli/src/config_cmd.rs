//! CLI Config Commands
//!
//! `init` writes a starter config; `validate` loads one and reports problems.

use std::path::Path;

use anyhow::{bail, Result};
use cmdgate_config::{apply_all_defaults, build_registry, write_config, GateConfig, PreparedConfig};

use crate::terminal_output::{paint, GREEN, RED, YELLOW};

pub async fn run_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let config = apply_all_defaults(GateConfig::default(), base_dir);
    write_config(&config, path).await?;
    println!("{} wrote {}", paint("✓", GREEN), path.display());
    Ok(())
}

pub fn run_validate(path: &Path, prepared: &PreparedConfig) -> Result<()> {
    let PreparedConfig { config, report } = prepared;
    for warning in &report.warnings {
        println!("{} {}: {}", paint("warning", YELLOW), warning.path, warning.message);
    }
    for error in &report.errors {
        println!("{} {}: {}", paint("error", RED), error.path, error.message);
    }
    if !report.is_valid() {
        bail!("{} has {} error(s)", path.display(), report.errors.len());
    }

    let registry = build_registry(config)?;
    println!(
        "{} {} is valid ({} triggers)",
        paint("✓", GREEN),
        path.display(),
        registry.len()
    );
    Ok(())
}
