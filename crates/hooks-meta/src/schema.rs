//! Hook configuration schema
//!
//! Mirrors the layout of a `.pre-commit-config.yaml` document:
//!
//! ```yaml
//! repos:
//!   - repo: https://github.com/psf/black
//!     rev: 20.8b1
//!     hooks:
//!       - id: black
//!         types: [python]
//!         args: [--line-length=88]
//! ```
//!
//! Values are built by [`crate::loader`] or programmatically through the
//! `new`/`with_*` constructors, and checked by [`crate::validation`].

use std::collections::BTreeSet;

use serde::Serialize;
use serde_yaml::Mapping;

/// Top-level hook configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Config {
    /// Global exclude pattern applied to every hook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Stop running hooks after the first failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,
    /// Repo entries in execution order
    pub repos: Vec<RepoEntry>,
    /// Keys this schema does not model, kept verbatim for the hook runner
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Config {
    pub fn new(repos: Vec<RepoEntry>) -> Self {
        Self {
            repos,
            ..Self::default()
        }
    }

    /// Every hook paired with its repo, in execution order.
    pub fn hooks(&self) -> impl Iterator<Item = (&RepoEntry, &HookEntry)> {
        self.repos
            .iter()
            .flat_map(|repo| repo.hooks.iter().map(move |hook| (repo, hook)))
    }

    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|repo| repo.hooks.len()).sum()
    }
}

/// A versioned reference to a repository that publishes hooks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RepoEntry {
    /// Repository URL
    pub repo: String,
    /// Pinned tag or commit
    pub rev: String,
    pub hooks: Vec<HookEntry>,
    /// Keys this schema does not model, kept verbatim
    #[serde(flatten)]
    pub extra: Mapping,
}

impl RepoEntry {
    pub fn new(repo: impl Into<String>, rev: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            rev: rev.into(),
            ..Self::default()
        }
    }

    pub fn with_hook(mut self, hook: HookEntry) -> Self {
        self.hooks.push(hook);
        self
    }
}

/// A single hook selected from a repo entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HookEntry {
    /// Hook identifier published by the repo at its rev
    pub id: String,
    /// Display name overriding the published one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// File type tags a file must carry for the hook to run on it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeSet<String>>,
    /// Include pattern for file paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// Exclude pattern for file paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Extra arguments passed to the hook, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// Keys this schema does not model (`stages`, `language_version`, ...)
    #[serde(flatten)]
    pub extra: Mapping,
}

impl HookEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Arguments as a slice; empty when none were configured.
    pub fn args(&self) -> &[String] {
        self.args.as_deref().unwrap_or_default()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
