//! Schema, loading and validation for pre-commit hook configuration.
//!
//! Reads a `.pre-commit-config.yaml` style document into a strongly-typed
//! [`Config`], rejecting malformed input before a hook runner acts on it.
//!
//! ```no_run
//! let config = hooks_meta::load(".pre-commit-config.yaml")?;
//! for (repo, hook) in config.hooks() {
//!     println!("{}@{} {}", repo.repo, repo.rev, hook.id);
//! }
//! # Ok::<(), hooks_meta::Error>(())
//! ```

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;
pub mod writer;

pub use error::{Error, Result, Violation};
pub use loader::{DEFAULT_CONFIG_FILE, load, parse};
pub use schema::{Config, HookEntry, RepoEntry};
pub use validation::validate;
pub use writer::{save, to_yaml};
