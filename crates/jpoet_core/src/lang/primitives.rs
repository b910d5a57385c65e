//! Java primitive types (plus `void`, which is only legal as a method return type).

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Void,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

/// Every primitive type, `void` first.
pub const ALL_PRIMITIVES: &[PrimitiveType] = &[
    PrimitiveType::Void,
    PrimitiveType::Boolean,
    PrimitiveType::Byte,
    PrimitiveType::Short,
    PrimitiveType::Int,
    PrimitiveType::Long,
    PrimitiveType::Char,
    PrimitiveType::Float,
    PrimitiveType::Double,
];

impl PrimitiveType {
    /// Return the keyword spelling (`int`, `void`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Void => "void",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Simple name of the `java.lang` wrapper class (`Integer` for `int`).
    pub fn boxed_simple_name(self) -> &'static str {
        match self {
            PrimitiveType::Void => "Void",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Char => "Character",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
        }
    }
}

/// Look up a primitive type by keyword.
pub fn from_str(spelling: &str) -> Option<PrimitiveType> {
    ALL_PRIMITIVES.iter().copied().find(|p| p.as_str() == spelling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::java_lang::is_java_lang_type;

    #[test]
    fn test_from_str() {
        assert_eq!(from_str("int"), Some(PrimitiveType::Int));
        assert_eq!(from_str("Integer"), None);
    }

    #[test]
    fn test_boxed_names_live_in_java_lang() {
        for p in ALL_PRIMITIVES {
            assert!(is_java_lang_type(p.boxed_simple_name()), "{}", p.as_str());
        }
    }
}
