//! Core shared types for jlit.
//!
//! This crate is intentionally small: text ranges, the selection interval,
//! single-file edits, and the line-break policy shared by the copy and paste
//! pipelines.

mod edit;
mod interval;
mod linebreak;
mod text;

pub use edit::{apply_text_edits, EditError, TextEdit};
pub use interval::{Interval, InvalidRange};
pub use linebreak::{normalize_line_break, LineBreakPolicy};
pub use text::{LineIndex, TextRange};
