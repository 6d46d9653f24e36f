use thiserror::Error;

/// Errors surfaced by the copy and paste pipelines.
#[derive(Debug, Error)]
pub enum LiteralToolsError {
    /// A selection with inverted bounds reached the library. Callers are
    /// expected to order their offsets, so this indicates a caller bug.
    #[error("invalid selection: {0}")]
    InvalidRange(#[from] jlit_core::InvalidRange),

    /// A string-literal token could not be decoded.
    #[error("malformed string literal: {0}")]
    MalformedLiteral(#[from] jlit_syntax::LiteralError),

    /// Paste was requested with nothing on the clipboard.
    #[error("clipboard is empty")]
    EmptyClipboard,
}
