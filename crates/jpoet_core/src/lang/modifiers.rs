//! Java declaration modifiers.
//!
//! [`Modifier`] variants are declared in the canonical order recommended by the Java Language Specification, and
//! the derived `Ord` follows that order. Collecting modifiers into a `BTreeSet<Modifier>` therefore always yields
//! them in the order they must be printed.
//!
//! ## Examples
//! ```rust
//! use std::collections::BTreeSet;
//! use jpoet_core::Modifier;
//!
//! let set: BTreeSet<Modifier> = [Modifier::Final, Modifier::Static, Modifier::Public].into_iter().collect();
//! let spelled: Vec<&str> = set.iter().map(|m| m.as_str()).collect();
//! assert_eq!(spelled, ["public", "static", "final"]);
//! ```

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Sealed,
    NonSealed,
}

/// Every modifier, in canonical order.
pub const ALL_MODIFIERS: &[Modifier] = &[
    Modifier::Public,
    Modifier::Protected,
    Modifier::Private,
    Modifier::Abstract,
    Modifier::Default,
    Modifier::Static,
    Modifier::Final,
    Modifier::Transient,
    Modifier::Volatile,
    Modifier::Synchronized,
    Modifier::Native,
    Modifier::Strictfp,
    Modifier::Sealed,
    Modifier::NonSealed,
];

impl Modifier {
    /// Return the source spelling of the modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
            Modifier::Sealed => "sealed",
            Modifier::NonSealed => "non-sealed",
        }
    }
}

/// Look up a modifier by its source spelling.
pub fn from_str(spelling: &str) -> Option<Modifier> {
    ALL_MODIFIERS.iter().copied().find(|m| m.as_str() == spelling)
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_spelling() {
        for m in ALL_MODIFIERS {
            assert_eq!(from_str(m.as_str()), Some(*m));
        }
        assert_eq!(from_str("const"), None);
    }

    #[test]
    fn test_canonical_order() {
        let mut shuffled = vec![Modifier::Final, Modifier::Abstract, Modifier::Private, Modifier::Static];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Modifier::Private, Modifier::Abstract, Modifier::Static, Modifier::Final]
        );
    }
}
