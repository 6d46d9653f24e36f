//! Mapping editor selections onto string-literal tokens.

use jlit_core::Interval;
use jlit_syntax::{NodeId, SyntaxKind, SyntaxTree};

use crate::chain::chain_containing;

/// The closed interval of a string literal's content, excluding both quote
/// characters. `""` has no interior offsets and is never selectable, which
/// also keeps the interval construction valid.
fn content_span(tree: &SyntaxTree, id: NodeId) -> Option<Interval> {
    if tree.kind(id) != SyntaxKind::StringLiteral {
        return None;
    }
    let range = tree.range(id);
    if range.len() < 3 {
        return None;
    }
    Interval::new(range.start + 1, range.end - 2).ok()
}

/// Resolve a copy selection to the nodes whose text should be copied, in
/// source order.
///
/// A caret or single-offset selection is *point mode*: the first literal
/// whose content touches the selection expands to its whole concatenation
/// chain, so a caret inside one segment copies the full joined value. Wider
/// selections are *range mode*: exactly the literals whose content overlaps
/// the selection, with no chain expansion. An empty result means the
/// selection touches no literal.
pub fn resolve_copy_selection(tree: &SyntaxTree, selection: Interval) -> Vec<NodeId> {
    let leaves = tree.leaves();
    if selection.len() <= 1 {
        for &leaf in &leaves {
            if let Some(span) = content_span(tree, leaf) {
                if span.intersects(selection) {
                    return chain_containing(tree, leaf);
                }
            }
        }
        return Vec::new();
    }

    leaves
        .into_iter()
        .filter(|&leaf| {
            content_span(tree, leaf).is_some_and(|span| span.intersects(selection))
        })
        .collect()
}

/// The string literal whose quoted extent contains `offset`, if any.
///
/// Used by paste to decide quote splicing: an offset counts as inside from
/// just after the opening quote through the closing quote itself, so a caret
/// sitting on either quote boundary splices rather than nesting quotes.
pub fn literal_at_offset(tree: &SyntaxTree, offset: u32) -> Option<NodeId> {
    tree.leaves().into_iter().find(|&leaf| {
        if tree.kind(leaf) != SyntaxKind::StringLiteral {
            return false;
        }
        let range = tree.range(leaf);
        range.len() >= 2 && range.start + 1 <= offset && offset <= range.end - 1
    })
}
