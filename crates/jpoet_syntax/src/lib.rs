//! Declaration tree for the jpoet Java source generator.
//!
//! This crate holds the immutable, builder-constructed model of one compilation unit:
//! - [`names`]: package names and [`ClassName`], the symbol reference every import decision is keyed by,
//! - [`types`]: [`TypeName`] references (primitive, class, parameterized, array, type variable, wildcard),
//! - [`code`]: [`CodeBlock`], the templated code fragment language (`$L`, `$S`, `$T`, `$N`, ...),
//! - [`decl`]: type, field, method, parameter and annotation declarations.
//!
//! ## Notes
//! - This crate is intentionally “data-only”: it does no import resolution and produces no source text. The
//!   `jpoet` crate consumes it through the read-only accessors and the [`code::NameResolver`] seam.
//! - Fragments are validated when they are built; a [`CodeBlock`] that exists is always well-formed.
//!
//! ## Examples
//! ```rust
//! use jpoet_syntax::{Arg, ClassName, CodeBlock};
//!
//! let list = ClassName::new("java.util", "List").unwrap();
//! let block = CodeBlock::of("$T<$T> names", [Arg::ty(list.clone()), Arg::ty(list)]);
//! assert!(block.is_ok());
//! assert!(CodeBlock::of("$T", []).is_err());
//! ```

pub mod code;
pub mod decl;
pub mod errors;
pub mod names;
pub mod types;

pub use code::{Arg, CodeBlock, CodePart, Literal, NameResolver, Token};
pub use decl::{AnnotationSpec, FieldSpec, MethodKind, MethodSpec, ParameterSpec, TypeSpec};
pub use errors::{FragmentProblem, SyntaxError};
pub use jpoet_core::{Modifier, PrimitiveType, TypeKind};
pub use names::{ClassName, PackageName};
pub use types::{ParameterizedTypeName, TypeName, TypeVariableName, WildcardTypeName};
