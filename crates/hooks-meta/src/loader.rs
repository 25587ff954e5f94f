//! Loading hook configuration from YAML
//!
//! Parsing happens in two passes. The text is first read into an untyped
//! YAML value, so syntax problems surface as [`Error::Parse`]. The value is
//! then walked field by field into a [`Config`], recording every missing or
//! mistyped field instead of stopping at the first one. Invariant checks
//! from [`crate::validation`] run last and their findings are merged in.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result, Violation};
use crate::schema::{Config, HookEntry, RepoEntry};
use crate::validation;

/// File name the hook runner looks for at the repository root
pub const DEFAULT_CONFIG_FILE: &str = ".pre-commit-config.yaml";

// Listed in schema order; violations are reported in this order too
const CONFIG_KEYS: &[&str] = &["exclude", "fail_fast", "repos"];
const REPO_KEYS: &[&str] = &["repo", "rev", "hooks"];
const HOOK_KEYS: &[&str] = &["id", "name", "types", "files", "exclude", "args"];

/// Load and validate the config file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = hooks_fs::read_text(path).map_err(|e| match e {
        hooks_fs::Error::Io { path, source } if source.kind() == ErrorKind::InvalidData => {
            Error::parse(Some(path), format!("file is not valid UTF-8: {source}"))
        }
        hooks_fs::Error::Io { path, source } => Error::NotFound { path, source },
        other => Error::Fs(other),
    })?;

    let config = parse_document(&content, Some(path))?;
    tracing::debug!(
        path = %path.display(),
        repos = config.repos.len(),
        hooks = config.hook_count(),
        "loaded hook configuration"
    );
    Ok(config)
}

/// Parse and validate a config held in memory.
pub fn parse(content: &str) -> Result<Config> {
    parse_document(content, None)
}

fn parse_document(content: &str, path: Option<&Path>) -> Result<Config> {
    let source = || path.map(PathBuf::from);

    let mut document: Value =
        serde_yaml::from_str(content).map_err(|e| Error::parse(source(), e.to_string()))?;
    // `<<: *anchor` keys are part of the document, not fields of their own
    document
        .apply_merge()
        .map_err(|e| Error::parse(source(), e.to_string()))?;
    let root = match &document {
        Value::Mapping(root) => root,
        Value::Null => return Err(Error::parse(source(), "document is empty")),
        other => {
            return Err(Error::parse(
                source(),
                format!("expected a mapping at the top level, found {}", kind(other)),
            ));
        }
    };

    let mut reader = Reader::default();
    let config = reader.config(root);
    let mut violations = reader.violations;

    // A field that failed to read already has a violation; its fallback
    // value would only produce noise here.
    let semantic: Vec<_> = validation::check(&config)
        .into_iter()
        .filter(|v| !violations.iter().any(|seen| seen.covers(&v.field)))
        .collect();
    violations.extend(semantic);

    if violations.is_empty() {
        Ok(config)
    } else {
        violations.sort_by_cached_key(|v| schema_order(&v.field));
        Err(Error::Schema { violations })
    }
}

/// Sort key for a field path: each segment ranks by its position in the
/// schema at that depth, then by sequence index, so `repos[0].rev` comes
/// before `repos[0].hooks[0].id` and `repos[2]` before `repos[10]`.
fn schema_order(field: &str) -> Vec<(usize, usize)> {
    field
        .split('.')
        .enumerate()
        .map(|(depth, segment)| {
            let (name, index) = match segment.split_once('[') {
                Some((name, index)) => (name, index.trim_end_matches(']').parse().unwrap_or(0)),
                None => (segment, 0),
            };
            let keys = match depth {
                0 => CONFIG_KEYS,
                1 => REPO_KEYS,
                _ => HOOK_KEYS,
            };
            let rank = keys.iter().position(|key| *key == name).unwrap_or(keys.len());
            (rank, index)
        })
        .collect()
}

/// Walks a YAML value into the typed schema, recording violations as it goes.
#[derive(Default)]
struct Reader {
    violations: Vec<Violation>,
}

impl Reader {
    fn config(&mut self, root: &Mapping) -> Config {
        let repos = match root.get("repos") {
            None => {
                self.push(Violation::new("repos", "missing required field"));
                Vec::new()
            }
            Some(Value::Sequence(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| self.repo(&format!("repos[{index}]"), item))
                .collect(),
            Some(other) => {
                self.push(Violation::new(
                    "repos",
                    format!("expected a sequence, found {}", kind(other)),
                ));
                Vec::new()
            }
        };

        Config {
            exclude: self.optional_string(root, "exclude", "exclude", None),
            fail_fast: self.optional_bool(root, "fail_fast", "fail_fast"),
            repos,
            extra: extra_keys(root, "", CONFIG_KEYS),
        }
    }

    fn repo(&mut self, field: &str, item: &Value) -> RepoEntry {
        let Value::Mapping(map) = item else {
            self.push(Violation::new(
                field,
                format!("expected a mapping, found {}", kind(item)),
            ));
            return RepoEntry::default();
        };

        let url = map.get("repo").and_then(Value::as_str);
        let repo = self.required_string(map, "repo", &format!("{field}.repo"), None);
        let rev = self.required_string(map, "rev", &format!("{field}.rev"), url);

        let hooks_field = format!("{field}.hooks");
        let hooks = match map.get("hooks") {
            None => {
                self.push(Violation::new(hooks_field, "missing required field").in_repo(url));
                Vec::new()
            }
            Some(Value::Sequence(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| self.hook(&format!("{hooks_field}[{index}]"), item, url))
                .collect(),
            Some(other) => {
                self.push(
                    Violation::new(
                        hooks_field,
                        format!("expected a sequence, found {}", kind(other)),
                    )
                    .in_repo(url),
                );
                Vec::new()
            }
        };

        RepoEntry {
            repo,
            rev,
            hooks,
            extra: extra_keys(map, field, REPO_KEYS),
        }
    }

    fn hook(&mut self, field: &str, item: &Value, url: Option<&str>) -> HookEntry {
        let Value::Mapping(map) = item else {
            self.push(
                Violation::new(field, format!("expected a mapping, found {}", kind(item)))
                    .in_repo(url),
            );
            return HookEntry::default();
        };

        let types = self
            .optional_string_list(map, "types", &format!("{field}.types"), url)
            .map(|tags| {
                let unique: BTreeSet<String> = tags.iter().cloned().collect();
                if unique.len() != tags.len() {
                    tracing::warn!(field = %format!("{field}.types"), "duplicate file type tags collapsed");
                }
                unique
            });

        HookEntry {
            id: self.required_string(map, "id", &format!("{field}.id"), url),
            name: self.optional_string(map, "name", &format!("{field}.name"), url),
            types,
            files: self.optional_string(map, "files", &format!("{field}.files"), url),
            exclude: self.optional_string(map, "exclude", &format!("{field}.exclude"), url),
            args: self.optional_string_list(map, "args", &format!("{field}.args"), url),
            extra: extra_keys(map, field, HOOK_KEYS),
        }
    }

    fn required_string(
        &mut self,
        map: &Mapping,
        key: &str,
        field: &str,
        url: Option<&str>,
    ) -> String {
        match map.get(key) {
            Some(_) => self
                .optional_string(map, key, field, url)
                .unwrap_or_default(),
            None => {
                self.push(Violation::new(field, "missing required field").in_repo(url));
                String::new()
            }
        }
    }

    fn optional_string(
        &mut self,
        map: &Mapping,
        key: &str,
        field: &str,
        url: Option<&str>,
    ) -> Option<String> {
        match map.get(key)? {
            Value::String(value) => Some(value.clone()),
            other => {
                self.push(Violation::new(field, expected("a string", other)).in_repo(url));
                None
            }
        }
    }

    fn optional_bool(&mut self, map: &Mapping, key: &str, field: &str) -> Option<bool> {
        match map.get(key)? {
            Value::Bool(value) => Some(*value),
            other => {
                self.push(Violation::new(
                    field,
                    format!("expected a boolean, found {}", kind(other)),
                ));
                None
            }
        }
    }

    fn optional_string_list(
        &mut self,
        map: &Mapping,
        key: &str,
        field: &str,
        url: Option<&str>,
    ) -> Option<Vec<String>> {
        let items = match map.get(key)? {
            Value::Sequence(items) => items,
            other => {
                self.push(
                    Violation::new(
                        field,
                        format!("expected a sequence of strings, found {}", kind(other)),
                    )
                    .in_repo(url),
                );
                return None;
            }
        };

        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(value) => values.push(value.clone()),
                other => self.push(
                    Violation::new(format!("{field}[{index}]"), expected("a string", other))
                        .in_repo(url),
                ),
            }
        }
        Some(values)
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

/// Entries of `map` outside `known`, passed through untouched.
fn extra_keys(map: &Mapping, field: &str, known: &[&str]) -> Mapping {
    let mut extra = Mapping::new();
    for (key, value) in map {
        if key.as_str().is_some_and(|name| known.contains(&name)) {
            continue;
        }
        let location = if field.is_empty() { "top level" } else { field };
        tracing::debug!(key = ?key, at = %location, "keeping unmodelled key");
        extra.insert(key.clone(), value.clone());
    }
    extra
}

fn expected(what: &str, found: &Value) -> String {
    match found {
        // Unquoted versions such as `rev: 1.0` read as numbers
        Value::Number(n) => {
            format!("expected {what}, found number {n} (quote it to keep it as text)")
        }
        other => format!("expected {what}, found {}", kind(other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
