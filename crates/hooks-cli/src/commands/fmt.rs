//! Fmt command implementation

use std::path::Path;

use colored::Colorize;

use crate::error::Result;

/// Print the normalized document, or write it back in place.
pub fn run_fmt(path: &Path, write: bool) -> Result<()> {
    let config = hooks_meta::load(path)?;

    if write {
        hooks_meta::save(path, &config)?;
        println!("{} Rewrote {}", "=>".blue().bold(), path.display());
    } else {
        print!("{}", hooks_meta::to_yaml(&config)?);
    }
    Ok(())
}
