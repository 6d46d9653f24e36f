//! Java lexing, a permissive expression-spine parse tree, and the
//! string-literal codec.
//!
//! The parser here is deliberately not a full Java grammar: the literal
//! tooling only needs faithful tokens plus real tree structure around
//! `+`-concatenation operands. Everything else in the source stays a flat
//! token child of the root, which keeps the tree cheap to build on every
//! invocation while preserving exact byte offsets for all tokens.

mod lexer;
mod literals;
mod parser;
mod syntax_kind;
mod tree;

pub use lexer::{lex, Token};
pub use literals::{decode_string_literal, encode_string_literal, LiteralError};
pub use parser::parse;
pub use syntax_kind::SyntaxKind;
pub use tree::{NodeId, SyntaxTree};
