//! The copy pipeline: selection → chain members → decoded, joined text.

use jlit_core::{normalize_line_break, Interval, LineBreakPolicy, LineIndex};
use jlit_syntax::{decode_string_literal, parse, NodeId, SyntaxKind, SyntaxTree};
use tracing::debug;

use crate::config::LiteralToolsConfig;
use crate::error::LiteralToolsError;
use crate::selection::resolve_copy_selection;

/// Result of a copy request. Only `Copied` carries clipboard text; the other
/// variants let a host report *why* nothing was copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The selection touched no string literal.
    NoLiteral,
    /// Literals were found but their joined value is empty (for example a
    /// lone `"\n"` copied under the `remove` policy).
    Empty,
    Copied {
        text: String,
        /// Number of chain members that contributed; 1 for a lone literal.
        segments: usize,
    },
}

/// Copy the string-literal value under `selection` out of `source`.
pub fn copy_literals(
    source: &str,
    selection: Interval,
    config: &LiteralToolsConfig,
) -> Result<CopyOutcome, LiteralToolsError> {
    let tree = parse(source);
    let members = resolve_copy_selection(&tree, selection);
    if members.is_empty() {
        debug!(
            start = selection.start(),
            end = selection.end(),
            "selection touches no string literal"
        );
        return Ok(CopyOutcome::NoLiteral);
    }

    let text = join_segments(&tree, source, &members, config.copy_line_break)?;
    if text.is_empty() {
        return Ok(CopyOutcome::Empty);
    }
    debug!(segments = members.len(), bytes = text.len(), "copied literal text");
    Ok(CopyOutcome::Copied {
        text,
        segments: members.len(),
    })
}

/// The clipboard text contributed by one chain member.
///
/// String literals decode to their runtime value; any other member (an
/// identifier, a call, a numeric literal) contributes its source text
/// verbatim. The member is unwrapped through exclusive single-child
/// wrappers first so a bare `LiteralExpression` decodes like its token.
pub fn decode_segment(
    tree: &SyntaxTree,
    source: &str,
    node: NodeId,
) -> Result<String, LiteralToolsError> {
    let leaf = tree.single_leaf(node);
    let kind = tree.kind(leaf);
    let text = tree.text(leaf, source);
    // An Error token starting with a quote is an unterminated literal;
    // routing it through the decoder reports it instead of emitting the
    // broken source text.
    if kind == SyntaxKind::StringLiteral || (kind == SyntaxKind::Error && text.starts_with('"')) {
        Ok(decode_string_literal(text)?)
    } else {
        Ok(tree.text(node, source).to_string())
    }
}

/// Decode and concatenate chain members into one clipboard string.
///
/// Line-break handling follows source layout: when the next member starts on
/// a later line than the current one ends, the current segment gets a
/// terminator appended (rewritten per `policy`) even if it lacked one, so a
/// chain formatted one-segment-per-line copies as multiple lines. Members
/// sharing a line are joined untouched. The final segment is normalized
/// without forcing a terminator.
pub fn join_segments(
    tree: &SyntaxTree,
    source: &str,
    members: &[NodeId],
    policy: LineBreakPolicy,
) -> Result<String, LiteralToolsError> {
    let line_index = LineIndex::new(source);
    let mut out = String::new();
    for (i, &node) in members.iter().enumerate() {
        let decoded = decode_segment(tree, source, node)?;
        let piece = match members.get(i + 1) {
            Some(&next) => {
                let current_line =
                    line_index.line_of(tree.range(node).end.saturating_sub(1));
                let next_line = line_index.line_of(tree.range(next).start);
                if next_line > current_line {
                    normalize_line_break(&decoded, policy, true)
                } else {
                    decoded
                }
            }
            None => normalize_line_break(&decoded, policy, false),
        };
        out.push_str(&piece);
    }
    Ok(out)
}
