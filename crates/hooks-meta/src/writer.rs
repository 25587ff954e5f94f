//! Serializing hook configuration back to YAML

use std::path::Path;

use crate::error::{Error, Result};
use crate::schema::Config;
use crate::validation;

/// Render a config as a YAML document.
///
/// Optional fields that are unset are left out, and repo and hook order is
/// kept as-is so the output loads back into an equal [`Config`].
pub fn to_yaml(config: &Config) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| Error::Serialize {
        message: e.to_string(),
    })
}

/// Validate a config and write it to `path` atomically.
pub fn save(path: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = path.as_ref();
    validation::validate(config)?;

    let content = to_yaml(config)?;
    hooks_fs::write_text(path, &content)?;

    tracing::debug!(
        path = %path.display(),
        repos = config.repos.len(),
        "saved hook configuration"
    );
    Ok(())
}
