//! A Java compilation unit: one package, an optional file comment and one top-level declaration.
//!
//! [`JavaFile`] is the rendering entry point. It caches the import decisions per [`ImportOptions`], so repeated
//! renders of the same file (with different layout settings, or from several threads) resolve imports once.
//!
//! ## Examples
//! ```rust
//! use jpoet::{JavaFile, RenderConfig};
//! use jpoet_syntax::{PackageName, TypeSpec};
//!
//! let person = TypeSpec::record("Person").unwrap();
//! let file = JavaFile::new(PackageName::parse("example.person").unwrap(), person);
//! assert_eq!(
//!     file.render(&RenderConfig::default()).unwrap(),
//!     "package example.person;\n\nrecord Person() {\n}\n"
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use jpoet_syntax::{CodeBlock, PackageName, TypeSpec};
use serde::Deserialize;

use crate::emit::{self, ImportOptions, ImportTable, RenderError};
use crate::format::RenderConfig;

#[derive(Debug, Deserialize)]
#[serde(from = "RawJavaFile")]
pub struct JavaFile {
    pub package: PackageName,
    pub file_comment: CodeBlock,
    pub type_spec: TypeSpec,
    import_cache: Mutex<HashMap<ImportOptions, Arc<ImportTable>>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawJavaFile {
    #[serde(default)]
    package: PackageName,
    #[serde(default)]
    file_comment: CodeBlock,
    type_spec: TypeSpec,
}

impl From<RawJavaFile> for JavaFile {
    fn from(raw: RawJavaFile) -> Self {
        JavaFile::new(raw.package, raw.type_spec).with_file_comment(raw.file_comment)
    }
}

impl Clone for JavaFile {
    fn clone(&self) -> Self {
        JavaFile::new(self.package.clone(), self.type_spec.clone()).with_file_comment(self.file_comment.clone())
    }
}

impl JavaFile {
    pub fn new(package: PackageName, type_spec: TypeSpec) -> Self {
        Self {
            package,
            file_comment: CodeBlock::new(),
            type_spec,
            import_cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_file_comment(mut self, comment: CodeBlock) -> Self {
        self.file_comment = comment;
        self
    }

    /// Import decisions for `options`, resolved on first use and cached for the life of the file.
    pub fn imports(&self, options: &ImportOptions) -> Result<Arc<ImportTable>, RenderError> {
        if let Some(table) = self.cache().get(options) {
            tracing::debug!(root = ?self.type_spec.name, "import cache hit");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(emit::resolve(&self.type_spec, &self.package, options)?);
        let mut cache = self.cache();
        let cached = cache.entry(options.clone()).or_insert(table);
        Ok(Arc::clone(cached))
    }

    fn cache(&self) -> std::sync::MutexGuard<'_, HashMap<ImportOptions, Arc<ImportTable>>> {
        // The cache only ever holds complete tables, so a poisoned lock is still consistent.
        self.import_cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Render the file to Java source text.
    ///
    /// ## Parameters
    /// - `config`: layout and import settings.
    ///
    /// ## Returns
    /// - The complete compilation unit, ending with a newline, or the first error found. No partial text is ever
    ///   returned.
    #[tracing::instrument(skip_all, fields(root = self.type_spec.name.as_deref().unwrap_or_default()))]
    pub fn render(&self, config: &RenderConfig) -> Result<String, RenderError> {
        let imports = self.imports(&config.import_options())?;
        emit::render_file(&self.file_comment, &self.package, &self.type_spec, &imports, config)
    }

    /// The path of this file under a source root: `<dir>/<package path>/<Name>.java`.
    pub fn path_in(&self, dir: &Path) -> Result<PathBuf, RenderError> {
        let name = self.type_spec.name.as_deref().ok_or(RenderError::AnonymousRoot)?;
        let mut path = dir.to_path_buf();
        path.extend(self.package.segments());
        path.push(format!("{name}.java"));
        Ok(path)
    }

    /// Render and write the file below `dir`, creating package directories as needed.
    ///
    /// ## Returns
    /// - The path written.
    pub fn write_to_dir(&self, dir: &Path, config: &RenderConfig) -> Result<PathBuf, RenderError> {
        let source = self.render(config)?;
        let path = self.path_in(dir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, source).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote java source");
        Ok(path)
    }
}

impl fmt::Display for JavaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(&RenderConfig::default()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
