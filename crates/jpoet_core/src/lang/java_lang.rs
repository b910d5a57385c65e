//! Names made visible in every compilation unit by the implicit `import java.lang.*`.
//!
//! A foreign type whose simple name appears here cannot be imported without shadowing the `java.lang` type of the
//! same name, so the import resolver keeps such symbols qualified.
//!
//! ## Examples
//! ```rust
//! use jpoet_core::lang::java_lang;
//!
//! assert!(java_lang::is_java_lang_type("String"));
//! assert!(!java_lang::is_java_lang_type("List"));
//! ```

/// The package whose top-level types are implicitly imported.
pub const JAVA_LANG_PACKAGE: &str = "java.lang";

/// Public top-level types of `java.lang` (sorted).
pub const JAVA_LANG_TYPES: &[&str] = &[
    "AbstractMethodError",
    "Appendable",
    "ArithmeticException",
    "ArrayIndexOutOfBoundsException",
    "ArrayStoreException",
    "AssertionError",
    "AutoCloseable",
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Class",
    "ClassCastException",
    "ClassLoader",
    "ClassNotFoundException",
    "CloneNotSupportedException",
    "Cloneable",
    "Comparable",
    "Deprecated",
    "Double",
    "Enum",
    "Error",
    "Exception",
    "Float",
    "FunctionalInterface",
    "IllegalAccessException",
    "IllegalArgumentException",
    "IllegalStateException",
    "IndexOutOfBoundsException",
    "InstantiationException",
    "Integer",
    "InterruptedException",
    "Iterable",
    "LinkageError",
    "Long",
    "Math",
    "NegativeArraySizeException",
    "NoSuchFieldException",
    "NoSuchMethodException",
    "NullPointerException",
    "Number",
    "NumberFormatException",
    "Object",
    "OutOfMemoryError",
    "Override",
    "Package",
    "Process",
    "ProcessBuilder",
    "Readable",
    "Record",
    "ReflectiveOperationException",
    "Runnable",
    "Runtime",
    "RuntimeException",
    "SafeVarargs",
    "SecurityException",
    "Short",
    "StackOverflowError",
    "StrictMath",
    "String",
    "StringBuffer",
    "StringBuilder",
    "StringIndexOutOfBoundsException",
    "SuppressWarnings",
    "System",
    "Thread",
    "ThreadLocal",
    "Throwable",
    "TypeNotPresentException",
    "UnsupportedOperationException",
    "Void",
];

/// Check whether `simple_name` denotes a type implicitly visible through `java.lang`.
pub fn is_java_lang_type(simple_name: &str) -> bool {
    JAVA_LANG_TYPES.binary_search(&simple_name).is_ok()
}

/// Check whether a dotted package name is `java.lang`.
pub fn is_java_lang_package(package: &str) -> bool {
    package == JAVA_LANG_PACKAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        let mut sorted = JAVA_LANG_TYPES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, JAVA_LANG_TYPES);
    }

    #[test]
    fn test_lookup() {
        assert!(is_java_lang_type("Object"));
        assert!(is_java_lang_type("Override"));
        assert!(!is_java_lang_type("Map"));
        assert!(is_java_lang_package("java.lang"));
        assert!(!is_java_lang_package("java.lang.reflect"));
    }
}
