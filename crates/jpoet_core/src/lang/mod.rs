//! Java language vocabulary registries.
//!
//! Each submodule is the single source of truth for one slice of the target language. Callers should go through
//! these registries instead of matching on string spellings.

pub mod java_lang;
pub mod keywords;
pub mod kinds;
pub mod modifiers;
pub mod primitives;
