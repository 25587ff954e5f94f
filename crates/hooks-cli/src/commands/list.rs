//! List command implementation

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

/// One row of `hookcfg list --json`
#[derive(Debug, Serialize)]
struct ListedHook<'a> {
    repo: &'a str,
    rev: &'a str,
    id: &'a str,
    name: &'a str,
    args: &'a [String],
}

/// Print every hook in execution order.
pub fn run_list(path: &Path, json: bool) -> Result<()> {
    let config = hooks_meta::load(path)?;

    let rows: Vec<ListedHook<'_>> = config
        .hooks()
        .map(|(repo, hook)| ListedHook {
            repo: &repo.repo,
            rev: &repo.rev,
            id: &hook.id,
            name: hook.display_name(),
            args: hook.args(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{} {} hook(s) configured:\n", "=>".blue().bold(), rows.len());
    println!(
        "  {:<45} {:<12} {:<20} {}",
        "REPO".bold(),
        "REV".bold(),
        "HOOK".bold(),
        "ARGS".bold()
    );
    println!("  {}", "\u{2500}".repeat(90).dimmed());

    for row in &rows {
        println!(
            "  {:<45} {:<12} {:<20} {}",
            row.repo,
            row.rev.cyan(),
            row.id,
            row.args.join(" ").dimmed()
        );
    }

    Ok(())
}
