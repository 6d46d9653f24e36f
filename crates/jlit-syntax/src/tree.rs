use jlit_core::TextRange;

use crate::syntax_kind::SyntaxKind;

/// Index of a node in a [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: SyntaxKind,
    range: TextRange,
    parent: Option<NodeId>,
    /// Ordered children; empty for terminals.
    children: Vec<NodeId>,
    is_token: bool,
}

/// An arena-backed parse tree.
///
/// Nodes are addressed by index; the parent link is a back-reference for
/// upward traversal only, never an ownership edge, so the structure stays
/// acyclic from the borrow checker's point of view. The tree never stores
/// text: node text is sliced from the source on demand.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SyntaxTree {
    pub(crate) fn builder() -> TreeBuilder {
        TreeBuilder { nodes: Vec::new() }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.nodes[id.index()].kind
    }

    #[inline]
    pub fn range(&self, id: NodeId) -> TextRange {
        self.nodes[id.index()].range
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// True for leaf tokens (terminals); interior nodes return false.
    #[inline]
    pub fn is_token(&self, id: NodeId) -> bool {
        self.nodes[id.index()].is_token
    }

    /// The raw source text covered by this node.
    #[inline]
    pub fn text<'a>(&self, id: NodeId, source: &'a str) -> &'a str {
        self.range(id).text(source)
    }

    /// All leaf nodes in source order, via an explicit-stack depth-first
    /// walk (concatenation chains in generated code can nest hundreds of
    /// levels deep, so native recursion is avoided).
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let children = self.children(id);
            if children.is_empty() {
                out.push(id);
            } else {
                stack.extend(children.iter().rev().copied());
            }
        }
        out
    }

    /// Descend through exclusive single-child wrappers to the underlying
    /// node (e.g. from a `LiteralExpression` to its literal token).
    pub fn single_leaf(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while self.children(current).len() == 1 {
            current = self.children(current)[0];
        }
        current
    }
}

pub(crate) struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub(crate) fn token(&mut self, kind: SyntaxKind, range: TextRange) -> NodeId {
        self.push(NodeData {
            kind,
            range,
            parent: None,
            children: Vec::new(),
            is_token: true,
        })
    }

    /// Create an interior node over already-built children. The node's range
    /// spans from the first child's start to the last child's end; `children`
    /// must be non-empty and in source order.
    pub(crate) fn node(&mut self, kind: SyntaxKind, children: Vec<NodeId>) -> NodeId {
        debug_assert!(!children.is_empty());
        let start = self.nodes[children[0].index()].range.start;
        let end = self.nodes[children[children.len() - 1].index()].range.end;
        let id = NodeId(self.nodes.len() as u32);
        for child in &children {
            self.nodes[child.index()].parent = Some(id);
        }
        self.push(NodeData {
            kind,
            range: TextRange { start, end },
            parent: None,
            children,
            is_token: false,
        })
    }

    pub(crate) fn finish(mut self, root_kind: SyntaxKind, children: Vec<NodeId>, len: u32) -> SyntaxTree {
        let root = NodeId(self.nodes.len() as u32);
        for child in &children {
            self.nodes[child.index()].parent = Some(root);
        }
        self.push(NodeData {
            kind: root_kind,
            range: TextRange { start: 0, end: len },
            parent: None,
            children,
            is_token: false,
        });
        SyntaxTree {
            nodes: self.nodes,
            root,
        }
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        id
    }
}
