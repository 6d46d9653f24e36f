//! Concatenation-chain discovery.
//!
//! A chain is the maximal run of `+` operators around an expression, e.g.
//! `"a" + name + "b"`. The parser builds these as left-leaning
//! `BinaryExpression` nodes, so the chain for the example is a node whose
//! left child is itself a concatenation; [`chain_members`] flattens that
//! shape back into source-order operands.

use jlit_syntax::{NodeId, SyntaxKind, SyntaxTree};

/// True iff `id` is a concatenation node: an interior node with exactly the
/// three children `[left, +, right]`.
pub fn is_concatenation(tree: &SyntaxTree, id: NodeId) -> bool {
    if tree.is_token(id) {
        return false;
    }
    let children = tree.children(id);
    children.len() == 3
        && tree.is_token(children[1])
        && tree.kind(children[1]) == SyntaxKind::Plus
}

/// Flatten a concatenation subtree into its operands, left to right.
///
/// Nested concatenations dissolve into the surrounding chain; any other node
/// (including `id` itself when it is not a concatenation) is a single
/// member. Iterative on an explicit stack because generated code nests
/// chains hundreds of operators deep.
pub fn chain_members(tree: &SyntaxTree, id: NodeId) -> Vec<NodeId> {
    let mut members = Vec::new();
    let mut stack = vec![id];
    while let Some(node) = stack.pop() {
        if is_concatenation(tree, node) {
            let children = tree.children(node);
            stack.push(children[2]);
            stack.push(children[0]);
        } else {
            members.push(node);
        }
    }
    members
}

/// The members of the widest concatenation chain containing `node`.
///
/// Walks upward to the nearest enclosing concatenation, without escaping
/// argument lists, index brackets, or parentheses (a literal used as a call
/// argument is not part of a chain the call participates in). From there it
/// keeps climbing while the parent is still a concatenation, then flattens
/// the topmost node. Without any enclosing concatenation the result is
/// `[node]`.
pub fn chain_containing(tree: &SyntaxTree, node: NodeId) -> Vec<NodeId> {
    let mut nearest = None;
    let mut current = node;
    while let Some(parent) = tree.parent(current) {
        if is_concatenation(tree, parent) {
            nearest = Some(parent);
            break;
        }
        if is_group_boundary(tree.kind(parent)) {
            break;
        }
        current = parent;
    }

    let Some(mut top) = nearest else {
        return vec![node];
    };
    while let Some(parent) = tree.parent(top) {
        if !is_concatenation(tree, parent) {
            break;
        }
        top = parent;
    }
    chain_members(tree, top)
}

fn is_group_boundary(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ArgumentList
            | SyntaxKind::IndexList
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::CompilationUnit
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jlit_syntax::parse;
    use pretty_assertions::assert_eq;

    fn string_leaf(tree: &SyntaxTree, source: &str, literal: &str) -> NodeId {
        tree.leaves()
            .into_iter()
            .find(|&id| {
                tree.kind(id) == SyntaxKind::StringLiteral && tree.text(id, source) == literal
            })
            .expect("literal present")
    }

    fn member_texts(tree: &SyntaxTree, source: &str, members: &[NodeId]) -> Vec<String> {
        members
            .iter()
            .map(|&id| tree.text(id, source).to_string())
            .collect()
    }

    #[test]
    fn chain_members_flatten_left_to_right() {
        let source = r#"s = "a" + name + "b";"#;
        let tree = parse(source);
        let leaf = string_leaf(&tree, source, r#""a""#);
        let members = chain_containing(&tree, leaf);
        assert_eq!(
            member_texts(&tree, source, &members),
            vec![r#""a""#, "name", r#""b""#]
        );
    }

    #[test]
    fn every_member_reaches_the_same_chain() {
        let source = r#"s = "a" + "b" + "c";"#;
        let tree = parse(source);
        let from_first = chain_containing(&tree, string_leaf(&tree, source, r#""a""#));
        let from_last = chain_containing(&tree, string_leaf(&tree, source, r#""c""#));
        assert_eq!(from_first, from_last);
        assert_eq!(from_first.len(), 3);
    }

    #[test]
    fn lone_literal_is_its_own_chain() {
        let source = r#"String s = "alone";"#;
        let tree = parse(source);
        let leaf = string_leaf(&tree, source, r#""alone""#);
        assert_eq!(chain_containing(&tree, leaf), vec![leaf]);
    }

    #[test]
    fn argument_list_blocks_the_upward_walk() {
        // The outer `+` concatenates the call result, not the argument.
        let source = r#"s = foo("a") + "b";"#;
        let tree = parse(source);
        let leaf = string_leaf(&tree, source, r#""a""#);
        assert_eq!(chain_containing(&tree, leaf), vec![leaf]);
    }

    #[test]
    fn parentheses_scope_the_chain() {
        let source = r#"s = ("a" + "b") + "c";"#;
        let tree = parse(source);
        let members = chain_containing(&tree, string_leaf(&tree, source, r#""a""#));
        assert_eq!(
            member_texts(&tree, source, &members),
            vec![r#""a""#, r#""b""#]
        );
    }

    #[test]
    fn chain_inside_method_arguments_is_found() {
        let source = r#"log.info("left " + value + " right");"#;
        let tree = parse(source);
        let members = chain_containing(&tree, string_leaf(&tree, source, r#""left ""#));
        assert_eq!(
            member_texts(&tree, source, &members),
            vec![r#""left ""#, "value", r#"" right""#]
        );
    }

    #[test]
    fn subtraction_is_not_a_concatenation() {
        let source = "x = a - b;";
        let tree = parse(source);
        let binary = tree
            .children(tree.root())
            .iter()
            .copied()
            .find(|&id| tree.kind(id) == SyntaxKind::BinaryExpression)
            .unwrap();
        assert!(!is_concatenation(&tree, binary));
        assert_eq!(chain_members(&tree, binary), vec![binary]);
    }

    #[test]
    fn deep_chain_flattens_without_recursion() {
        let mut source = String::from(r#"s = "0""#);
        for i in 1..600 {
            source.push_str(&format!(r#" + "{i}""#));
        }
        source.push(';');
        let tree = parse(&source);
        let leaf = string_leaf(&tree, &source, r#""0""#);
        assert_eq!(chain_containing(&tree, leaf).len(), 600);
    }
}
