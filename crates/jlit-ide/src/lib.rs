//! String-literal concatenation tooling over the expression-spine tree.
//!
//! Two user-facing operations:
//! - **copy**: map a selection onto the string literals it overlaps, expand a
//!   caret inside one literal to the whole `+`-chain around it, decode every
//!   segment, and join them with configurable line-break handling;
//! - **paste**: re-encode raw multi-line text as `+`-joined Java string
//!   literals, splicing cleanly when the selection starts or ends inside an
//!   existing literal.
//!
//! Everything here is a pure function over a freshly parsed tree: edits
//! invalidate offsets, so nothing is cached between invocations and no
//! partial output is ever produced.

mod chain;
mod config;
mod copy;
mod error;
mod paste;
mod selection;

pub use chain::{chain_containing, chain_members, is_concatenation};
pub use config::LiteralToolsConfig;
pub use copy::{copy_literals, decode_segment, join_segments, CopyOutcome};
pub use error::LiteralToolsError;
pub use paste::{encode_for_paste, paste_as_literals};
pub use selection::{literal_at_offset, resolve_copy_selection};
