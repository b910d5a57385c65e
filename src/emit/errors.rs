//! Define error types for rendering a declaration tree to Java source.
//!
//! Every variant aborts the render before any text is returned; there is no partial output.

use std::path::PathBuf;

use jpoet_syntax::SyntaxError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    /// A malformed name or fragment that slipped past construction (typically a tree loaded from JSON).
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("`$<` lowers indentation below zero in {context}")]
    #[diagnostic(
        code(jpoet::unbalanced_indent),
        help("every `$<` must close an earlier `$>` (or a `begin_control_flow`)")
    )]
    UnbalancedIndent { context: String },

    #[error("the top-level declaration of a file must have a name")]
    #[diagnostic(code(jpoet::anonymous_root))]
    AnonymousRoot,

    #[error("{what} in {context} has no name")]
    #[diagnostic(
        code(jpoet::missing_name),
        help("only enum constant bodies and `$L` arguments may be anonymous")
    )]
    MissingName { what: &'static str, context: String },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(jpoet::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
