//! jpoet version information.
//!
//! This module exposes the generator version as a single constant so the CLI and any generated-file banners agree
//! on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The jpoet version string (for example, `0.1.0`).
pub const JPOET_VERSION: &str = env!("CARGO_PKG_VERSION");
