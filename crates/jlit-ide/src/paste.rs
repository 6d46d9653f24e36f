//! The paste pipeline: clipboard text → `+`-joined literal replacement.

use jlit_core::{normalize_line_break, Interval, LineBreakPolicy, TextEdit, TextRange};
use jlit_syntax::{encode_string_literal, parse};
use tracing::debug;

use crate::config::LiteralToolsConfig;
use crate::error::LiteralToolsError;
use crate::selection::literal_at_offset;

/// Paste `clipboard` into `source` at `selection` as Java string literals.
///
/// The replacement is one literal per clipboard line, joined with `\n+ `.
/// When the selection starts or ends inside an existing literal the
/// corresponding boundary quote is trimmed so the new text splices into the
/// literal instead of nesting quotes. Returns the single edit to apply; an
/// empty clipboard is an error so hosts can report it instead of silently
/// replacing the selection with nothing.
pub fn paste_as_literals(
    source: &str,
    selection: Interval,
    clipboard: &str,
    config: &LiteralToolsConfig,
) -> Result<TextEdit, LiteralToolsError> {
    if clipboard.is_empty() {
        return Err(LiteralToolsError::EmptyClipboard);
    }

    let tree = parse(source);
    let splice_start = literal_at_offset(&tree, selection.start()).is_some();
    let splice_end = literal_at_offset(&tree, selection.end()).is_some();
    let replacement = encode_for_paste(clipboard, config.paste_line_break, splice_start, splice_end);
    debug!(splice_start, splice_end, lines = clipboard.lines().count(), "encoded clipboard");

    Ok(TextEdit::replace(
        TextRange {
            start: selection.start(),
            end: selection.end(),
        },
        replacement,
    ))
}

/// Encode raw clipboard text as `+`-joined string literals.
///
/// The text is split on `\n`; every line but the last keeps a terminator
/// rewritten per `policy` (under `remove` an empty line vanishes entirely
/// and contributes no literal). `splice_start` drops the opening quote of
/// the first literal, `splice_end` the closing quote of the last.
pub fn encode_for_paste(
    raw: &str,
    policy: LineBreakPolicy,
    splice_start: bool,
    splice_end: bool,
) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();
    let last = lines.len() - 1;

    let mut chunks: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let piece = if i < last {
            normalize_line_break(&format!("{line}\n"), policy, true)
        } else {
            (*line).to_string()
        };
        if piece.is_empty() {
            continue;
        }
        chunks.push(encode_string_literal(&piece));
    }

    if splice_start {
        if let Some(first) = chunks.first_mut() {
            first.remove(0);
        }
    }
    if splice_end {
        if let Some(last) = chunks.last_mut() {
            last.pop();
        }
    }
    chunks.join("\n+ ")
}
