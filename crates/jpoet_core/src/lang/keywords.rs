//! Java keyword vocabulary (for identifier validation).

/// Reserved keywords plus the reserved literals `true`, `false` and `null`.
///
/// ## Notes
/// - Contextual keywords (`var`, `yield`, `record`, `sealed`, `permits`, `module`, ...) are **not** listed: they remain
///   legal identifiers in most positions.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue", "default",
    "do", "double", "else", "enum", "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "_", "true", "false", "null",
];

/// Check whether an identifier is a reserved Java word.
pub fn is_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words() {
        assert!(is_keyword("class"));
        assert!(is_keyword("null"));
        assert!(is_keyword("goto"));
    }

    #[test]
    fn test_contextual_keywords_are_identifiers() {
        assert!(!is_keyword("var"));
        assert!(!is_keyword("record"));
        assert!(!is_keyword("yield"));
        assert!(!is_keyword("String"));
    }
}
