//! Invariant checks on an in-memory [`Config`]
//!
//! These run on every loaded config and on configs built in code, so a
//! caller never has to trust how a value was constructed.

use regex::Regex;

use crate::error::{Error, Result, Violation};
use crate::schema::{Config, HookEntry, RepoEntry};

/// Validate a config, reporting every broken invariant at once.
pub fn validate(config: &Config) -> Result<()> {
    let violations = check(config);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::Schema { violations })
    }
}

/// Collect all invariant violations in document order.
pub fn check(config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(pattern) = &config.exclude {
        check_pattern(&mut violations, "exclude", pattern, None);
    }

    if config.repos.is_empty() {
        violations.push(Violation::new(
            "repos",
            "at least one repo entry is required",
        ));
    }
    for (index, repo) in config.repos.iter().enumerate() {
        check_repo(&mut violations, &format!("repos[{index}]"), repo);
    }

    violations
}

fn check_repo(violations: &mut Vec<Violation>, field: &str, entry: &RepoEntry) {
    let url = Some(entry.repo.as_str());

    if is_blank(&entry.repo) {
        violations.push(Violation::new(format!("{field}.repo"), "must not be empty"));
    }
    if is_blank(&entry.rev) {
        violations.push(Violation::new(format!("{field}.rev"), "must not be empty").in_repo(url));
    }
    if entry.hooks.is_empty() {
        violations.push(
            Violation::new(format!("{field}.hooks"), "at least one hook is required").in_repo(url),
        );
    }
    for (index, hook) in entry.hooks.iter().enumerate() {
        check_hook(violations, &format!("{field}.hooks[{index}]"), hook, url);
    }
}

fn check_hook(violations: &mut Vec<Violation>, field: &str, hook: &HookEntry, url: Option<&str>) {
    if is_blank(&hook.id) {
        violations.push(Violation::new(format!("{field}.id"), "must not be empty").in_repo(url));
    }
    if hook.name.as_deref().is_some_and(is_blank) {
        violations.push(
            Violation::new(format!("{field}.name"), "must not be empty when present").in_repo(url),
        );
    }
    if let Some(types) = &hook.types {
        if types.iter().any(|tag| is_blank(tag)) {
            violations.push(
                Violation::new(format!("{field}.types"), "file type tags must not be empty")
                    .in_repo(url),
            );
        }
    }
    if let Some(pattern) = &hook.files {
        check_pattern(violations, &format!("{field}.files"), pattern, url);
    }
    if let Some(pattern) = &hook.exclude {
        check_pattern(violations, &format!("{field}.exclude"), pattern, url);
    }
}

fn check_pattern(violations: &mut Vec<Violation>, field: &str, pattern: &str, url: Option<&str>) {
    if let Err(e) = Regex::new(pattern) {
        // regex errors span several lines; the first one names the problem
        let reason = e.to_string();
        let reason = reason
            .lines()
            .rev()
            .find(|line| line.starts_with("error:"))
            .unwrap_or_else(|| reason.lines().next().unwrap_or_default())
            .trim_start_matches("error:")
            .trim()
            .to_string();
        violations.push(
            Violation::new(field, format!("invalid regular expression: {reason}")).in_repo(url),
        );
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black() -> RepoEntry {
        RepoEntry::new("https://github.com/psf/black", "20.8b1").with_hook(HookEntry::new("black"))
    }

    #[test]
    fn test_valid_config_passes() {
        let config = Config::new(vec![black()]);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_config_rejected() {
        let violations = check(&Config::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "repos");
    }

    #[test]
    fn test_reports_every_violation() {
        let config = Config::new(vec![
            RepoEntry::new("", "").with_hook(HookEntry::new("")),
            RepoEntry::new("https://github.com/psf/black", "20.8b1"),
        ]);

        let err = validate(&config).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "repos[0].repo",
                "repos[0].rev",
                "repos[0].hooks[0].id",
                "repos[1].hooks",
            ]
        );
        assert_eq!(
            err.violations()[3].repo.as_deref(),
            Some("https://github.com/psf/black")
        );
    }

    #[test]
    fn test_whitespace_rev_is_blank() {
        let mut repo = black();
        repo.rev = "   ".into();
        let violations = check(&Config::new(vec![repo]));
        assert_eq!(violations[0].field, "repos[0].rev");
        assert_eq!(
            violations[0].repo.as_deref(),
            Some("https://github.com/psf/black")
        );
    }

    #[test]
    fn test_bad_patterns_rejected() {
        let mut repo = black();
        repo.hooks[0].files = Some(r"\.py$".into());
        repo.hooks[0].exclude = Some("(unclosed".into());
        let mut config = Config::new(vec![repo]);
        config.exclude = Some("^docs/[".into());

        let violations = check(&config);
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["exclude", "repos[0].hooks[0].exclude"]);
        assert!(violations[0].message.starts_with("invalid regular expression"));
    }

    #[test]
    fn test_empty_type_tag_rejected() {
        let mut repo = black();
        repo.hooks[0] = HookEntry::new("black").with_types(["python", ""]);
        let violations = check(&Config::new(vec![repo]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "repos[0].hooks[0].types");
    }

    #[test]
    fn test_empty_args_allowed() {
        let mut repo = black();
        repo.hooks[0] = HookEntry::new("black").with_args(["", "--check"]);
        assert!(check(&Config::new(vec![repo])).is_empty());
    }
}
