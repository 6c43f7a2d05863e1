//! Core types for single-line text editing: positions, edit errors, and the line buffer.

/// Edit operation errors.
pub mod edit;
/// Single-line input buffer used by prompts.
pub mod line;
/// Character index types.
pub mod range;
/// Rope utilities and extensions.
pub mod rope;

pub use edit::EditError;
pub use line::{LineBuffer, PromptLine};
pub use range::{CharIdx, CharLen};
pub use rope::{first_line, has_line_break, is_line_break};
pub use ropey::{Rope, RopeSlice};
