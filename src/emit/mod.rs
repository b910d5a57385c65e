//! Render a declaration tree to Java source.
//!
//! Rendering is two-pass: [`imports::resolve`] decides how every referenced class prints before the
//! [`CodeWriter`] emits a single character, so the import block can precede the code that depends on it.
//!
//! ## See also
//! - [`imports`]: symbol collection and import decisions
//! - [`writer`]: the code writer, name lookup and fragment emission
//! - [`decls`]: declaration emission

mod decls;
mod errors;
pub mod imports;
pub mod writer;

pub use errors::RenderError;
pub use imports::{Decision, ImportOptions, ImportTable, resolve};
pub use writer::CodeWriter;

use jpoet_syntax::{ClassName, CodeBlock, PackageName, TypeSpec};

use crate::format::RenderConfig;

/// Emit one compilation unit using already-resolved imports.
///
/// ## Parameters
/// - `file_comment`: emitted as `//` lines before the package declaration (nothing if empty).
/// - `package`: the target package; the default package emits no package line.
/// - `root`: the named top-level declaration.
/// - `imports`: the table [`resolve`] produced for the same `root`, `package` and options.
/// - `config`: layout settings.
///
/// ## Returns
/// - The complete source text, ending with a newline.
#[tracing::instrument(skip_all, fields(package = %package, imports = imports.imports().len()))]
pub fn render_file(
    file_comment: &CodeBlock,
    package: &PackageName,
    root: &TypeSpec,
    imports: &ImportTable,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let name = root.name.as_deref().ok_or(RenderError::AnonymousRoot)?;
    let root_class = ClassName::in_package(package, name)?;
    let mut writer = CodeWriter::new(config, imports);
    writer.emit_file(file_comment, package, root, &root_class)?;
    Ok(writer.finish())
}
