//! Error types for hooks-meta

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file is missing or could not be read.
    #[error("Configuration not found at {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a well-formed YAML mapping document.
    #[error("Failed to parse configuration{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// The document parsed but breaks one or more schema rules.
    #[error("{}", summarize(.violations))]
    Schema { violations: Vec<Violation> },

    #[error("Failed to serialize configuration: {message}")]
    Serialize { message: String },

    #[error("Filesystem error: {0}")]
    Fs(#[from] hooks_fs::Error),
}

impl Error {
    /// Every violation carried by a schema error, empty for other kinds.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Schema { violations } => violations,
            _ => &[],
        }
    }

    pub(crate) fn parse(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path,
            message: message.into(),
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}

fn summarize(violations: &[Violation]) -> String {
    let mut out = format!(
        "Invalid configuration ({} problem{})",
        violations.len(),
        if violations.len() == 1 { "" } else { "s" }
    );
    for violation in violations {
        out.push_str("\n  - ");
        out.push_str(&violation.to_string());
    }
    out
}

/// A single broken schema rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending field, e.g. `repos[1].hooks[0].args`
    pub field: String,
    pub message: String,
    /// URL of the enclosing repo entry, when it is known
    pub repo: Option<String>,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            repo: None,
        }
    }

    /// Attach the URL of the repo entry the field belongs to.
    pub fn in_repo(mut self, repo: Option<&str>) -> Self {
        self.repo = repo
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string);
        self
    }

    /// True when `field` is this violation's field or nested beneath it.
    pub(crate) fn covers(&self, field: &str) -> bool {
        field
            .strip_prefix(self.field.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.') || rest.starts_with('['))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(repo) = &self.repo {
            write!(f, " (repo {repo})")?;
        }
        Ok(())
    }
}
