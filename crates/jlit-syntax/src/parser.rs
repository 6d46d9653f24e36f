use tracing::trace;

use crate::lexer::{lex, Token};
use crate::syntax_kind::SyntaxKind;
use crate::tree::{NodeId, SyntaxTree, TreeBuilder};

/// Parse Java source into an expression-spine tree.
///
/// The parser is permissive: it builds real interior nodes only around the
/// expressions that can participate in `+`-concatenation (literal wrappers,
/// name/call chains, parenthesized groups, unary prefixes, and the
/// multiplicative/additive binary levels). All other tokens become direct
/// children of the compilation unit, in source order. Trivia is dropped from
/// the tree, like the hidden channel of a conventional Java parse tree, so
/// leaf order still equals source order and every leaf keeps exact offsets.
///
/// A `BinaryExpression` built here always has exactly the three children
/// `[left, operator, right]`, which is the structural contract the
/// concatenation extractor relies on.
pub fn parse(source: &str) -> SyntaxTree {
    let tokens: Vec<Token> = lex(source)
        .into_iter()
        .filter(|t| !t.kind.is_trivia() && t.kind != SyntaxKind::Eof)
        .collect();
    trace!(tokens = tokens.len(), "parsing expression spine");

    let mut parser = Parser {
        tokens,
        pos: 0,
        builder: SyntaxTree::builder(),
    };

    let mut children = Vec::new();
    while !parser.at_end() {
        children.push(parser.parse_element());
    }
    parser
        .builder
        .finish(SyntaxKind::CompilationUnit, children, source.len() as u32)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    builder: TreeBuilder,
}

impl Parser {
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn current(&self) -> SyntaxKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::Eof)
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::Eof)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    fn bump(&mut self) -> NodeId {
        let token = self.tokens[self.pos];
        self.pos += 1;
        self.builder.token(token.kind, token.range)
    }

    fn parse_element(&mut self) -> NodeId {
        if at_expression_start(self.current()) {
            self.parse_expression()
        } else {
            self.bump()
        }
    }

    fn parse_expression(&mut self) -> NodeId {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> NodeId {
        let mut left = self.parse_multiplicative();
        while matches!(self.current(), SyntaxKind::Plus | SyntaxKind::Minus)
            && at_operand_start(self.nth(1))
        {
            let op = self.bump();
            let right = self.parse_multiplicative();
            left = self
                .builder
                .node(SyntaxKind::BinaryExpression, vec![left, op, right]);
        }
        left
    }

    fn parse_multiplicative(&mut self) -> NodeId {
        let mut left = self.parse_unary();
        while matches!(
            self.current(),
            SyntaxKind::Star | SyntaxKind::Slash | SyntaxKind::Percent
        ) && at_operand_start(self.nth(1))
        {
            let op = self.bump();
            let right = self.parse_unary();
            left = self
                .builder
                .node(SyntaxKind::BinaryExpression, vec![left, op, right]);
        }
        left
    }

    fn parse_unary(&mut self) -> NodeId {
        let is_prefix = matches!(
            self.current(),
            SyntaxKind::Plus
                | SyntaxKind::Minus
                | SyntaxKind::Bang
                | SyntaxKind::Tilde
                | SyntaxKind::PlusPlus
                | SyntaxKind::MinusMinus
        );
        if is_prefix && at_operand_start(self.nth(1)) {
            let op = self.bump();
            let operand = self.parse_unary();
            return self
                .builder
                .node(SyntaxKind::UnaryExpression, vec![op, operand]);
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> NodeId {
        let mut parts = Vec::new();
        if self.at(SyntaxKind::NewKw) {
            parts.push(self.bump());
        }
        parts.push(self.parse_primary());

        let mut saw_call = false;
        loop {
            match self.current() {
                SyntaxKind::Dot if is_member_name(self.nth(1)) => {
                    parts.push(self.bump());
                    parts.push(self.bump());
                }
                SyntaxKind::LParen => {
                    parts.push(self.parse_group(
                        SyntaxKind::ArgumentList,
                        SyntaxKind::LParen,
                        SyntaxKind::RParen,
                    ));
                    saw_call = true;
                }
                SyntaxKind::LBracket => {
                    parts.push(self.parse_group(
                        SyntaxKind::IndexList,
                        SyntaxKind::LBracket,
                        SyntaxKind::RBracket,
                    ));
                }
                SyntaxKind::PlusPlus | SyntaxKind::MinusMinus => {
                    parts.push(self.bump());
                }
                _ => break,
            }
        }

        if parts.len() == 1 {
            return parts.pop().expect("postfix always has a primary");
        }
        let kind = if saw_call {
            SyntaxKind::MethodCallExpression
        } else {
            SyntaxKind::NameExpression
        };
        self.builder.node(kind, parts)
    }

    fn parse_primary(&mut self) -> NodeId {
        let kind = self.current();
        if kind.is_literal_token() {
            let token = self.bump();
            return self
                .builder
                .node(SyntaxKind::LiteralExpression, vec![token]);
        }
        if kind == SyntaxKind::LParen {
            return self.parse_group(
                SyntaxKind::ParenthesizedExpression,
                SyntaxKind::LParen,
                SyntaxKind::RParen,
            );
        }
        // Identifiers, `this`, `super` — or, on malformed input, whatever
        // token is here; consuming it keeps the parser making progress.
        self.bump()
    }

    /// Parse a delimited group (`(...)` or `[...]`). Expressions inside the
    /// group get real structure; separators and anything unrecognized stay
    /// flat children. Stops at the matching close token or end of input.
    fn parse_group(&mut self, kind: SyntaxKind, open: SyntaxKind, close: SyntaxKind) -> NodeId {
        debug_assert!(self.at(open));
        let mut children = vec![self.bump()];
        while !self.at_end() && !self.at(close) {
            children.push(self.parse_element());
        }
        if self.at(close) {
            children.push(self.bump());
        }
        self.builder.node(kind, children)
    }
}

fn at_expression_start(kind: SyntaxKind) -> bool {
    kind.is_literal_token()
        || matches!(
            kind,
            SyntaxKind::Identifier
                | SyntaxKind::ThisKw
                | SyntaxKind::SuperKw
                | SyntaxKind::NewKw
                | SyntaxKind::LParen
        )
}

fn at_operand_start(kind: SyntaxKind) -> bool {
    at_expression_start(kind)
        || matches!(
            kind,
            SyntaxKind::Plus
                | SyntaxKind::Minus
                | SyntaxKind::Bang
                | SyntaxKind::Tilde
                | SyntaxKind::PlusPlus
                | SyntaxKind::MinusMinus
        )
}

fn is_member_name(kind: SyntaxKind) -> bool {
    // `.class`, `.this`, `.new` and friends are all legal member accesses.
    kind == SyntaxKind::Identifier
        || (kind >= SyntaxKind::AbstractKw && kind <= SyntaxKind::NullKw)
}
