//! Provide the canonical Java vocabulary and pure helpers for the jpoet source generator.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic, side-effect free facts about
//! the target language that both the declaration tree (`jpoet_syntax`) and the emission engine (`jpoet`) consult:
//! - reserved words and identifier validity,
//! - the names implicitly visible through `java.lang`,
//! - modifiers, primitive types and declaration kinds (with their implicit modifiers),
//! - string literal quoting.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no tree types.

pub mod identifiers;
pub mod lang;
pub mod strings;

pub use identifiers::{IdentifierProblem, validate_identifier};
pub use lang::kinds::TypeKind;
pub use lang::modifiers::Modifier;
pub use lang::primitives::PrimitiveType;
