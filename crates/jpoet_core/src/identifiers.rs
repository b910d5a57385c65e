//! Java identifier validation.
//!
//! An identifier starts with a Unicode `XID_Start` character, `$` or `_`, continues with `XID_Continue` characters or
//! `$`, and is not a reserved word (see [`crate::lang::keywords`]).
//!
//! ## Examples
//! ```rust
//! use jpoet_core::identifiers::{validate_identifier, IdentifierProblem};
//!
//! assert!(validate_identifier("firstName").is_ok());
//! assert_eq!(validate_identifier("class"), Err(IdentifierProblem::Keyword));
//! ```

use thiserror::Error;

use crate::lang::keywords;

/// Why a name is not a legal Java identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierProblem {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier is a reserved word")]
    Keyword,

    #[error("identifier cannot start with {0:?}")]
    IllegalStart(char),

    #[error("identifier cannot contain {0:?}")]
    IllegalChar(char),
}

/// Validate a single (undotted) Java identifier.
///
/// ## Returns
/// - `Ok(())` if `name` is usable as a type, member, parameter or package segment name.
/// - `Err(IdentifierProblem)` describing the first violation found.
pub fn validate_identifier(name: &str) -> Result<(), IdentifierProblem> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(IdentifierProblem::Empty);
    };
    if !is_identifier_start(first) {
        return Err(IdentifierProblem::IllegalStart(first));
    }
    if let Some(bad) = chars.find(|c| !is_identifier_part(*c)) {
        return Err(IdentifierProblem::IllegalChar(bad));
    }
    if keywords::is_keyword(name) {
        return Err(IdentifierProblem::Keyword);
    }
    Ok(())
}

/// Check whether `name` is a legal Java identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    validate_identifier(name).is_ok()
}

fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || unicode_ident::is_xid_start(c)
}

fn is_identifier_part(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}
