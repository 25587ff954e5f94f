//! Rendered error messages, as a user sees them

use hooks_meta::{Config, HookEntry, RepoEntry, parse, validate};

#[test]
fn snapshot_schema_error_lists_every_problem() {
    let err = parse(
        r#"
repos:
  - repo: https://github.com/psf/black
    hooks:
      - id: black
        args: --check
  - repo: https://github.com/prettier/prettier
    rev: v2.2.1
    hooks: []
"#,
    )
    .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @r###"
Invalid configuration (3 problems)
  - repos[0].rev: missing required field (repo https://github.com/psf/black)
  - repos[0].hooks[0].args: expected a sequence of strings, found string (repo https://github.com/psf/black)
  - repos[1].hooks: at least one hook is required (repo https://github.com/prettier/prettier)
"###);
}

#[test]
fn snapshot_single_problem_is_singular() {
    let config = Config::new(vec![
        RepoEntry::new("https://github.com/psf/black", "20.8b1").with_hook(HookEntry::new(" ")),
    ]);

    let err = validate(&config).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @r###"
Invalid configuration (1 problem)
  - repos[0].hooks[0].id: must not be empty (repo https://github.com/psf/black)
"###);
}

#[test]
fn snapshot_top_level_shape_error() {
    let err = parse("- repo: https://github.com/psf/black\n").unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"Failed to parse configuration: expected a mapping at the top level, found sequence");
}
