//! Rendering configuration for generated Java source
//!
//! Defaults follow the conventions of the JavaPoet family: two-space indentation and a 100 column limit.

use std::collections::BTreeSet;

use crate::emit::imports::ImportOptions;

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Text of one indentation level
    pub indent: String,
    /// Column at which wrap points turn into line breaks
    pub line_length: usize,
    /// Resolve `java.lang` types implicitly instead of importing them
    pub skip_java_lang_imports: bool,
    /// Simple names that are never imported; every class with one of these names prints fully qualified
    pub always_qualify: BTreeSet<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            line_length: 100,
            skip_java_lang_imports: false,
            always_qualify: BTreeSet::new(),
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the indentation unit to `width` spaces
    pub fn with_indent_width(self, width: usize) -> Self {
        self.with_indent(" ".repeat(width))
    }

    /// Set the maximum line length
    pub fn with_line_length(mut self, length: usize) -> Self {
        self.line_length = length;
        self
    }

    pub fn with_skip_java_lang_imports(mut self, skip: bool) -> Self {
        self.skip_java_lang_imports = skip;
        self
    }

    /// Never import classes whose simple name is `simple_name`
    pub fn with_always_qualify(mut self, simple_name: impl Into<String>) -> Self {
        self.always_qualify.insert(simple_name.into());
        self
    }

    /// The subset of this config that affects import decisions (and therefore the import cache key).
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            skip_java_lang_imports: self.skip_java_lang_imports,
            always_qualify: self.always_qualify.clone(),
        }
    }
}
