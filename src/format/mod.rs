//! Output formatting for generated Java source.
//!
//! - [`RenderConfig`]: the explicit configuration threaded through every render (indent unit, column limit, import
//!   options).
//! - [`LineWriter`]: the column-tracking output buffer with deferred wrap points that the code writer emits into.

mod config;
mod writer;

pub use config::RenderConfig;
pub use writer::{LinePrefix, LineWriter};
