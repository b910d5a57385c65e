//! Kinds of type declarations and the modifiers each kind implies for its members.
//!
//! Implicit modifiers are legal to write but redundant (an interface method is already `public abstract`), so the
//! emitter drops them. The tables follow JLS §9.3, §9.4, §9.5 and §8.9/§8.10.

use std::collections::BTreeSet;

use serde::Deserialize;

use super::modifiers::Modifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl TypeKind {
    /// Keyword introducing the declaration.
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Record => "record",
            TypeKind::Annotation => "@interface",
        }
    }

    /// Whether members of this kind default to abstract interface semantics.
    pub fn is_interface_like(self) -> bool {
        matches!(self, TypeKind::Interface | TypeKind::Annotation)
    }

    /// Modifiers every field declared in this kind already has.
    pub fn implicit_field_modifiers(self) -> BTreeSet<Modifier> {
        if self.is_interface_like() {
            [Modifier::Public, Modifier::Static, Modifier::Final].into_iter().collect()
        } else {
            BTreeSet::new()
        }
    }

    /// Modifiers every method declared in this kind already has.
    ///
    /// ## Notes
    /// - `abstract` is only implied for interface methods without a body; callers decide that by looking at
    ///   `default`/`static`/`private`.
    pub fn implicit_method_modifiers(self) -> BTreeSet<Modifier> {
        if self.is_interface_like() {
            [Modifier::Public, Modifier::Abstract].into_iter().collect()
        } else {
            BTreeSet::new()
        }
    }

    /// Modifiers every nested type declared in this kind already has.
    pub fn implicit_type_modifiers(self) -> BTreeSet<Modifier> {
        if self.is_interface_like() {
            [Modifier::Public, Modifier::Static].into_iter().collect()
        } else {
            BTreeSet::new()
        }
    }

    /// Modifiers a declaration of this kind has when it is itself a member of another type.
    pub fn as_member_modifiers(self) -> BTreeSet<Modifier> {
        match self {
            TypeKind::Class => BTreeSet::new(),
            TypeKind::Interface | TypeKind::Enum | TypeKind::Record | TypeKind::Annotation => {
                [Modifier::Static].into_iter().collect()
            }
        }
    }
}
