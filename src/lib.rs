#![forbid(unsafe_code)]
//! jpoet: a Java source generator
//!
//! Callers build an immutable declaration tree (see the `jpoet_syntax` crate) and render it into one deterministic,
//! formatted Java compilation unit. This crate provides the emission engine: import resolution, the code writer,
//! line wrapping, render configuration, the [`JavaFile`] entry point and the `jpoet` CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use jpoet::{JavaFile, RenderConfig};
//! use jpoet_syntax::{ClassName, PackageName, ParameterSpec, TypeSpec};
//!
//! let string = ClassName::java_lang("String").unwrap();
//! let person = TypeSpec::record("Person")
//!     .unwrap()
//!     .add_record_component(ParameterSpec::new("name", string).unwrap());
//! let file = JavaFile::new(PackageName::parse("example.person").unwrap(), person);
//!
//! let config = RenderConfig::default().with_skip_java_lang_imports(true);
//! assert_eq!(
//!     file.render(&config).unwrap(),
//!     "package example.person;\n\nrecord Person(String name) {\n}\n"
//! );
//! ```

pub mod cli;
pub mod emit;
pub mod file;
pub mod format;
pub mod version;

pub use emit::{Decision, ImportOptions, ImportTable, RenderError};
pub use file::JavaFile;
pub use format::RenderConfig;
pub use jpoet_syntax as syntax;
