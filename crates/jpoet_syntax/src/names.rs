//! Package names and class names (the symbol references of the declaration tree).
//!
//! A [`ClassName`] identifies a named type by its package plus its chain of simple names. `java.util.Map.Entry` is
//! package `java.util`, enclosing segments `[Map]` and simple name `Entry`. Two class names are the same symbol iff
//! their full segment sequences are equal.

use std::fmt;
use std::iter;

use jpoet_core::lang::java_lang;
use serde::Deserialize;

use crate::errors::{SyntaxError, check_identifier};

// ============================================================================
// Package names
// ============================================================================

/// A dotted package name. The empty name is the default (unnamed) package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct PackageName {
    segments: Vec<String>,
}

impl PackageName {
    /// Parse a dotted package name; `""` yields the default package.
    pub fn parse(dotted: &str) -> Result<Self, SyntaxError> {
        if dotted.is_empty() {
            return Ok(Self::default());
        }
        let segments = dotted
            .split('.')
            .map(|segment| check_identifier(segment).map(|()| segment.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// The default (unnamed) package.
    pub fn default_package() -> Self {
        Self::default()
    }

    pub fn is_default(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this is `java.lang`, whose top-level types are implicitly imported.
    pub fn is_java_lang(&self) -> bool {
        self.to_string() == java_lang::JAVA_LANG_PACKAGE
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl TryFrom<String> for PackageName {
    type Error = SyntaxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

// ============================================================================
// Class names
// ============================================================================

/// A fully-qualified reference to a named (possibly nested) type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "RawClassName")]
pub struct ClassName {
    package: PackageName,
    enclosing: Vec<String>,
    simple: String,
}

impl ClassName {
    /// Create a top-level class name.
    ///
    /// ## Parameters
    /// - `package`: dotted package name, `""` for the default package.
    /// - `simple_name`: the class's simple name.
    pub fn new(package: &str, simple_name: &str) -> Result<Self, SyntaxError> {
        let package = PackageName::parse(package)?;
        check_identifier(simple_name)?;
        Ok(Self {
            package,
            enclosing: Vec::new(),
            simple: simple_name.to_string(),
        })
    }

    /// Create a top-level class name in an already-parsed package.
    pub fn in_package(package: &PackageName, simple_name: &str) -> Result<Self, SyntaxError> {
        check_identifier(simple_name)?;
        Ok(Self {
            package: package.clone(),
            enclosing: Vec::new(),
            simple: simple_name.to_string(),
        })
    }

    /// Create a class name for a top-level type in `java.lang`.
    pub fn java_lang(simple_name: &str) -> Result<Self, SyntaxError> {
        Self::new(java_lang::JAVA_LANG_PACKAGE, simple_name)
    }

    /// Create the class name of a type nested directly inside `self`.
    pub fn nested(&self, simple_name: &str) -> Result<Self, SyntaxError> {
        check_identifier(simple_name)?;
        let mut enclosing = self.enclosing.clone();
        enclosing.push(self.simple.clone());
        Ok(Self {
            package: self.package.clone(),
            enclosing,
            simple: simple_name.to_string(),
        })
    }

    /// Guess the package/class split of a dotted name.
    ///
    /// Segments before the first one that starts with an upper-case letter form the package; the rest are the class
    /// and its enclosing classes. `java.util.Map.Entry` becomes package `java.util`, class `Map.Entry`.
    pub fn best_guess(dotted: &str) -> Result<Self, SyntaxError> {
        let segments: Vec<&str> = dotted.split('.').collect();
        let Some(first_class) = segments
            .iter()
            .position(|s| s.chars().next().is_some_and(char::is_uppercase))
        else {
            return Err(SyntaxError::UnrecognizedClassName {
                name: dotted.to_string(),
            });
        };
        let package = PackageName::parse(&segments[..first_class].join("."))?;
        let mut names = segments[first_class..].iter();
        let Some(top) = names.next() else {
            return Err(SyntaxError::UnrecognizedClassName {
                name: dotted.to_string(),
            });
        };
        names.try_fold(Self::in_package(&package, top)?, |outer, name| outer.nested(name))
    }

    pub fn package(&self) -> &PackageName {
        &self.package
    }

    /// The trailing simple name (`Entry` for `java.util.Map.Entry`).
    pub fn simple_name(&self) -> &str {
        &self.simple
    }

    /// Simple names of the enclosing classes, outermost first.
    pub fn enclosing_segments(&self) -> &[String] {
        &self.enclosing
    }

    /// All simple names, outermost first (`["Map", "Entry"]`).
    pub fn simple_names(&self) -> impl Iterator<Item = &str> {
        self.enclosing.iter().map(String::as_str).chain(iter::once(self.simple.as_str()))
    }

    /// Number of simple names (1 for a top-level class).
    pub fn depth(&self) -> usize {
        self.enclosing.len() + 1
    }

    /// The full segment sequence: package segments followed by the simple names.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.package.segments().iter().map(String::as_str).chain(self.simple_names())
    }

    pub fn is_top_level(&self) -> bool {
        self.enclosing.is_empty()
    }

    /// The class this one is nested in, if any.
    pub fn enclosing_class_name(&self) -> Option<ClassName> {
        let (simple, enclosing) = self.enclosing.split_last()?;
        Some(Self {
            package: self.package.clone(),
            enclosing: enclosing.to_vec(),
            simple: simple.clone(),
        })
    }

    /// The outermost class of the nesting chain.
    pub fn top_level_class_name(&self) -> ClassName {
        let simple = self.enclosing.first().unwrap_or(&self.simple).clone();
        Self {
            package: self.package.clone(),
            enclosing: Vec::new(),
            simple,
        }
    }

    /// Dotted name of the nesting chain without the package (`Map.Entry`).
    pub fn nested_path(&self) -> String {
        self.simple_names().collect::<Vec<_>>().join(".")
    }

    /// Fully-qualified dotted name (`java.util.Map.Entry`).
    pub fn canonical_name(&self) -> String {
        self.segments().collect::<Vec<_>>().join(".")
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// Serialized form: a dotted string (`"java.util.Map.Entry"`) or explicit parts.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawClassName {
    Dotted(String),
    Parts {
        #[serde(default)]
        package: String,
        names: Vec<String>,
    },
}

impl TryFrom<RawClassName> for ClassName {
    type Error = SyntaxError;

    fn try_from(raw: RawClassName) -> Result<Self, Self::Error> {
        match raw {
            RawClassName::Dotted(dotted) => Self::best_guess(&dotted),
            RawClassName::Parts { package, names } => {
                let mut names = names.iter();
                let Some(top) = names.next() else {
                    return Err(SyntaxError::UnrecognizedClassName { name: package });
                };
                names.try_fold(Self::new(&package, top)?, |outer, name| outer.nested(name))
            }
        }
    }
}
