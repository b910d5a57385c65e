//! Command implementations for the jpoet CLI.

use std::fs;
use std::path::Path;

use crate::emit::RenderError;
use crate::file::JavaFile;
use crate::format::RenderConfig;

use super::{CliError, CliResult, ExitCode};

/// Maximum declaration file size (10 MB).
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a declaration file with size validation.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(path: &Path) -> CliResult<String> {
    let display = path.display();
    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{display}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Declaration file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{display}': {e}")))
}

/// Parse a JSON declaration file into a [`JavaFile`].
///
/// Names and fragments are validated while loading, so malformed input fails here.
pub fn parse_java_file(source: &str, origin: &Path) -> CliResult<JavaFile> {
    serde_json::from_str(source)
        .map_err(|e| CliError::failure(format!("Invalid declaration file '{}': {}", origin.display(), e)))
}

pub fn load_java_file(path: &Path) -> CliResult<JavaFile> {
    let source = read_source(path)?;
    parse_java_file(&source, path)
}

/// Render a declaration file to stdout, or below `out_dir`.
pub fn render_file(path: &Path, out_dir: Option<&Path>, config: &RenderConfig) -> CliResult<ExitCode> {
    let file = load_java_file(path)?;
    warn_unused_qualifications(&file, config);

    match out_dir {
        Some(dir) => {
            let written = file.write_to_dir(dir, config).map_err(report)?;
            println!("Wrote {}", written.display());
        }
        None => {
            let source = file.render(config).map_err(report)?;
            print!("{source}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Print each referenced class with its import decision, in first-seen order.
pub fn print_imports(path: &Path, config: &RenderConfig) -> CliResult<ExitCode> {
    let file = load_java_file(path)?;
    warn_unused_qualifications(&file, config);

    let table = file.imports(&config.import_options()).map_err(report)?;
    for (class, decision) in table.symbols() {
        println!("{:<10} {}", format!("{decision:?}").to_lowercase(), class);
    }
    Ok(ExitCode::SUCCESS)
}

/// Format a render error as a full diagnostic report.
fn report(err: RenderError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

/// Warn about `--always-qualify` names that no referenced class has.
fn warn_unused_qualifications(file: &JavaFile, config: &RenderConfig) {
    if config.always_qualify.is_empty() {
        return;
    }
    let Ok(table) = file.imports(&config.import_options()) else {
        return;
    };
    for name in &config.always_qualify {
        if !table.symbols().any(|(class, _)| class.simple_name() == name) {
            tracing::warn!(name = %name, "--always-qualify name is not referenced by this file");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PERSON: &str = r#"{
        "package": "example.person",
        "type_spec": {
            "kind": "record",
            "name": "Person",
            "record_components": [{"name": "name", "type": {"class": "java.lang.String"}}]
        }
    }"#;

    #[test]
    fn test_parse_java_file() {
        let file = parse_java_file(PERSON, Path::new("person.json")).unwrap();
        assert_eq!(
            file.render(&RenderConfig::default()).unwrap(),
            "package example.person;\n\nimport java.lang.String;\n\nrecord Person(String name) {\n}\n"
        );
    }

    #[test]
    fn test_parse_java_file_reports_origin() {
        let err = parse_java_file("{\"type_spec\": 3}", Path::new("bad.json")).unwrap_err();
        assert!(err.message.contains("bad.json"), "{}", err.message);
    }

    #[test]
    fn test_malformed_fragment_fails_at_load() {
        let json = r#"{"type_spec": {"name": "A", "static_block": {"format": "$T;", "args": []}}}"#;
        assert!(parse_java_file(json, Path::new("a.json")).is_err());
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.json")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
