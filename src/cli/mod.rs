//! CLI module for the jpoet source generator
//!
//! ## Commands
//!
//! - `render <FILE.json>` - Render a JSON declaration file to Java source (stdout or `--out-dir`)
//! - `imports <FILE.json>` - Show every referenced class and how it resolves
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::format::RenderConfig;
use crate::version::JPOET_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate Java source files from JSON declaration trees
#[derive(Parser, Debug)]
#[command(name = "jpoet")]
#[command(version = JPOET_VERSION)]
#[command(about = "Generate Java source files from JSON declaration trees", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a declaration file to Java source
    Render {
        /// JSON file describing one Java file (package, file_comment, type_spec)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Write `<DIR>/<package path>/<Name>.java` instead of printing to stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        #[command(flatten)]
        options: RenderArgs,
    },

    /// Show the import decision for every class the file references
    Imports {
        /// JSON file describing one Java file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        options: RenderArgs,
    },
}

/// Rendering flags shared by the subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Spaces per indentation level (default 2)
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
    /// Column limit for wrapping (default 100)
    #[arg(long, value_name = "N")]
    pub line_length: Option<usize>,
    /// Do not import `java.lang` classes
    #[arg(long)]
    pub skip_java_lang_imports: bool,
    /// Never import classes with this simple name (repeatable)
    #[arg(long = "always-qualify", value_name = "NAME")]
    pub always_qualify: Vec<String>,
}

impl RenderArgs {
    /// Build the render configuration, starting from the defaults.
    pub fn to_config(&self) -> RenderConfig {
        let mut config = RenderConfig::new().with_skip_java_lang_imports(self.skip_java_lang_imports);
        if let Some(width) = self.indent {
            config = config.with_indent_width(width);
        }
        if let Some(length) = self.line_length {
            config = config.with_line_length(length);
        }
        for name in &self.always_qualify {
            config = config.with_always_qualify(name.clone());
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Render { file, out_dir, options } => {
            commands::render_file(&file, out_dir.as_deref(), &options.to_config())
        }
        Command::Imports { file, options } => commands::print_imports(&file, &options.to_config()),
    }
}

// ============================================================================
// Tests
// ============================================================================
