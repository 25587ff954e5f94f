//! Check command implementation

use std::path::Path;

use colored::Colorize;

use crate::error::Result;

/// Load and validate the configuration at `path`.
pub fn run_check(path: &Path) -> Result<()> {
    let config = hooks_meta::load(path)?;

    println!(
        "{} {} ({} repo(s), {} hook(s))",
        "ok".green().bold(),
        path.display(),
        config.repos.len(),
        config.hook_count()
    );
    Ok(())
}
