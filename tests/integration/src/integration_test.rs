//! End-to-end tests across hooks-fs and hooks-meta.
//!
//! Drives the loader the way a hook runner would: find the config at the
//! repository root, load it once, then walk hooks in order.

use hooks_meta::{Config, DEFAULT_CONFIG_FILE, Error, HookEntry, RepoEntry};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures")
        .join("pre-commit-config.yaml")
}

/// A project directory holding a copy of the fixture config at its root.
fn project_with_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let content = hooks_fs::read_text(&fixture()).unwrap();
    hooks_fs::write_text(&temp.path().join(DEFAULT_CONFIG_FILE), &content).unwrap();
    temp
}

fn config_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONFIG_FILE)
}

#[test]
fn runner_sees_formatters_in_listed_order() {
    let project = project_with_fixture();

    let config = hooks_meta::load(config_path(project.path())).unwrap();

    let plan: Vec<_> = config
        .hooks()
        .map(|(repo, hook)| format!("{}@{}:{}", repo.repo, repo.rev, hook.id))
        .collect();
    assert_eq!(
        plan,
        vec![
            "https://github.com/timothycrosley/isort@4.3.20:isort",
            "https://github.com/psf/black@20.8b1:black",
            "https://github.com/prettier/prettier@v2.2.1:prettier",
        ]
    );
    assert_eq!(config.repos[0].hooks[0].args().len(), 10);
    assert!(config.repos[1].hooks[0].args().is_empty());
}

#[test]
fn edited_config_is_revalidated_on_save() {
    let project = project_with_fixture();
    let path = config_path(project.path());
    let mut config = hooks_meta::load(&path).unwrap();

    // Dropping the rev must be caught before anything reaches disk
    config.repos[1].rev.clear();
    let err = hooks_meta::save(&path, &config).unwrap_err();
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(
        err.violations()[0].repo.as_deref(),
        Some("https://github.com/psf/black")
    );

    let on_disk = hooks_meta::load(&path).unwrap();
    assert_eq!(on_disk.repos[1].rev, "20.8b1");
}

#[test]
fn programmatic_config_saves_and_reloads() {
    let project = TempDir::new().unwrap();
    let path = config_path(project.path());
    let config = Config::new(vec![
        RepoEntry::new("https://github.com/psf/black", "20.8b1")
            .with_hook(HookEntry::new("black").with_types(["python"])),
    ]);

    hooks_meta::validate(&config).unwrap();
    hooks_meta::save(&path, &config).unwrap();

    assert_eq!(hooks_meta::load(&path).unwrap(), config);
}

#[test]
fn missing_config_is_not_a_parse_error() {
    let project = TempDir::new().unwrap();

    let err = hooks_meta::load(config_path(project.path())).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
}
