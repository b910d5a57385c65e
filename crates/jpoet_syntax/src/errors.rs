//! Errors raised while building declaration trees and code fragments.
//!
//! Every error here is fatal and detected at construction time, before any source text exists.

use jpoet_core::IdentifierProblem;
use miette::Diagnostic;
use thiserror::Error;

/// Error raised by tree and fragment constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("malformed code fragment {format:?}: {problem}")]
    #[diagnostic(
        code(jpoet::malformed_fragment),
        help("`$L`, `$S`, `$T` and `$N` each consume one argument of the matching kind; write `$$` for a literal `$`")
    )]
    MalformedFragment { format: String, problem: FragmentProblem },

    #[error("invalid identifier {name:?}: {problem}")]
    #[diagnostic(code(jpoet::invalid_identifier))]
    InvalidIdentifier { name: String, problem: IdentifierProblem },

    #[error("cannot tell the package from the class in {name:?}")]
    #[diagnostic(
        code(jpoet::unrecognized_class_name),
        help("class segments must start with an upper-case letter, or build the name with `ClassName::new`")
    )]
    UnrecognizedClassName { name: String },
}

/// What is wrong with a code fragment's format string or argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentProblem {
    #[error("dangling `$` at byte {position}")]
    DanglingMarker { position: usize },

    #[error("unknown placeholder `${tag}` at byte {position}")]
    UnknownPlaceholder { tag: char, position: usize },

    #[error("`${placeholder}` at byte {position} has no argument left ({supplied} supplied)")]
    MissingArgument { placeholder: char, position: usize, supplied: usize },

    #[error("{unused} unused argument(s): the format consumes {consumed} of {supplied}")]
    UnusedArguments { consumed: usize, supplied: usize, unused: usize },

    #[error("`${placeholder}` expects {expected}, got {found}")]
    ArgumentMismatch {
        placeholder: char,
        expected: &'static str,
        found: &'static str,
    },
}

impl SyntaxError {
    pub fn malformed(format: &str, problem: FragmentProblem) -> Self {
        SyntaxError::MalformedFragment {
            format: format.to_string(),
            problem,
        }
    }

    pub fn identifier(name: &str, problem: IdentifierProblem) -> Self {
        SyntaxError::InvalidIdentifier {
            name: name.to_string(),
            problem,
        }
    }
}

/// Validate `name` as a Java identifier, mapping failures into a [`SyntaxError`].
pub fn check_identifier(name: &str) -> Result<(), SyntaxError> {
    jpoet_core::validate_identifier(name).map_err(|problem| SyntaxError::identifier(name, problem))
}
