//! Layering guardrails to keep the vocabulary and syntax crates free of the CLI stack.
//!
//! `jpoet_core` and `jpoet_syntax` are pure libraries: they may not depend on the root `jpoet` crate, on clap,
//! or on a tracing subscriber. This test scans their `Cargo.toml` `[dependencies]` tables.

const FORBIDDEN: &[&str] = &["jpoet ", "jpoet=", "clap", "tracing-subscriber"];

fn dependency_lines(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut lines = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        lines.push(line_no_comment.to_string());
    }
    lines
}

fn assert_no_forbidden(crate_name: &str, manifest: &str) {
    for line in dependency_lines(manifest) {
        for forbidden in FORBIDDEN {
            if line.starts_with(forbidden) {
                panic!("`{crate_name}` must not depend on `{}` (found `{line}`)", forbidden.trim_end_matches([' ', '=']));
            }
        }
    }
}

#[test]
fn core_crate_stays_pure() {
    assert_no_forbidden("jpoet_core", include_str!("../crates/jpoet_core/Cargo.toml"));
}

#[test]
fn syntax_crate_stays_pure() {
    assert_no_forbidden("jpoet_syntax", include_str!("../crates/jpoet_syntax/Cargo.toml"));
}

#[test]
fn root_crate_depends_on_both_libraries() {
    let deps = dependency_lines(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|l| l.starts_with("jpoet_core")));
    assert!(deps.iter().any(|l| l.starts_with("jpoet_syntax")));
}
