use jlit_core::TextRange;

use crate::syntax_kind::SyntaxKind;

/// A lexed token: kind plus the byte range it covers in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl Token {
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.range.text(source)
    }
}

/// Tokenize Java source. The token stream is lossless (trivia included) and
/// always ends with a zero-width `Eof` token.
///
/// Unterminated string/char literals become `Error` tokens; downstream
/// operations refuse to decode them instead of guessing at intent.
pub fn lex(input: &str) -> Vec<Token> {
    let mut lexer = Lexer {
        input,
        bytes: input.as_bytes(),
        pos: 0,
        tokens: Vec::new(),
    };
    lexer.run();
    lexer.tokens
}

struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn run(&mut self) {
        while self.pos < self.bytes.len() {
            let start = self.pos;
            let kind = self.next_kind();
            debug_assert!(self.pos > start, "lexer must always make progress");
            self.tokens.push(Token {
                kind,
                range: TextRange::new(start, self.pos),
            });
        }
        self.tokens.push(Token {
            kind: SyntaxKind::Eof,
            range: TextRange::new(self.pos, self.pos),
        });
    }

    fn next_kind(&mut self) -> SyntaxKind {
        let b = self.bytes[self.pos];
        match b {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C => self.whitespace(),
            b'/' => match self.peek(1) {
                Some(b'/') => self.line_comment(),
                Some(b'*') => self.block_comment(),
                Some(b'=') => self.advance_with(2, SyntaxKind::SlashEq),
                _ => self.advance_with(1, SyntaxKind::Slash),
            },
            b'"' => {
                if self.peek(1) == Some(b'"') && self.peek(2) == Some(b'"') {
                    self.text_block()
                } else {
                    self.string_literal()
                }
            }
            b'\'' => self.char_literal(),
            b'0'..=b'9' => self.number(),
            b'.' => {
                if self.peek(1).is_some_and(|b| b.is_ascii_digit()) {
                    self.number()
                } else if self.peek(1) == Some(b'.') && self.peek(2) == Some(b'.') {
                    self.advance_with(3, SyntaxKind::Ellipsis)
                } else {
                    self.advance_with(1, SyntaxKind::Dot)
                }
            }
            _ if is_ident_start(self.current_char()) => self.ident_or_keyword(),
            _ => self.operator(),
        }
    }

    fn whitespace(&mut self) -> SyntaxKind {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C))
        {
            self.pos += 1;
        }
        SyntaxKind::Whitespace
    }

    fn line_comment(&mut self) -> SyntaxKind {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|&b| b != b'\n' && b != b'\r')
        {
            self.pos += 1;
        }
        SyntaxKind::LineComment
    }

    fn block_comment(&mut self) -> SyntaxKind {
        self.pos += 2;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'*' && self.peek(1) == Some(b'/') {
                self.pos += 2;
                return SyntaxKind::BlockComment;
            }
            self.bump_char();
        }
        // Unterminated block comment runs to EOF; still trivia.
        SyntaxKind::BlockComment
    }

    fn string_literal(&mut self) -> SyntaxKind {
        self.pos += 1; // opening quote
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'"' => {
                    self.pos += 1;
                    return SyntaxKind::StringLiteral;
                }
                b'\\' => {
                    self.pos += 1;
                    if self.pos < self.bytes.len() {
                        self.bump_char();
                    }
                }
                b'\n' | b'\r' => return SyntaxKind::Error,
                _ => self.bump_char(),
            }
        }
        SyntaxKind::Error
    }

    fn text_block(&mut self) -> SyntaxKind {
        self.pos += 3; // opening delimiter
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'"'
                && self.peek(1) == Some(b'"')
                && self.peek(2) == Some(b'"')
            {
                self.pos += 3;
                return SyntaxKind::TextBlock;
            }
            if self.bytes[self.pos] == b'\\' {
                self.pos += 1;
                if self.pos < self.bytes.len() {
                    self.bump_char();
                }
                continue;
            }
            self.bump_char();
        }
        SyntaxKind::Error
    }

    fn char_literal(&mut self) -> SyntaxKind {
        self.pos += 1; // opening quote
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\'' => {
                    self.pos += 1;
                    return SyntaxKind::CharLiteral;
                }
                b'\\' => {
                    self.pos += 1;
                    if self.pos < self.bytes.len() {
                        self.bump_char();
                    }
                }
                b'\n' | b'\r' => return SyntaxKind::Error,
                _ => self.bump_char(),
            }
        }
        SyntaxKind::Error
    }

    fn number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let hex = self.bytes[self.pos] == b'0' && matches!(self.peek(1), Some(b'x' | b'X'));
        if hex {
            self.pos += 2;
        }

        let mut saw_dot = false;
        let mut saw_exponent = false;
        while let Some(&b) = self.bytes.get(self.pos) {
            match b {
                b'0'..=b'9' | b'_' => self.pos += 1,
                b'a'..=b'f' | b'A'..=b'F' if hex => self.pos += 1,
                b'.' if !saw_dot && !saw_exponent => {
                    // Don't swallow `1..2` or a method call like `x1.toString()`.
                    let next = self.peek(1);
                    let digit_next = next
                        .is_some_and(|b| b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()));
                    let member_next = next == Some(b'.')
                        || next.is_some_and(|b| is_ident_start(Some(b as char)));
                    if digit_next || (next.is_some() && !member_next) || next.is_none() {
                        saw_dot = true;
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                b'e' | b'E' if !hex && !saw_exponent => {
                    saw_exponent = true;
                    self.pos += 1;
                    if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
                        self.pos += 1;
                    }
                }
                b'p' | b'P' if hex && !saw_exponent => {
                    saw_exponent = true;
                    self.pos += 1;
                    if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
                        self.pos += 1;
                    }
                }
                b'x' | b'X' | b'b' | b'B' if self.pos == start + 1 => self.pos += 1,
                _ => break,
            }
        }

        match self.bytes.get(self.pos) {
            Some(b'l' | b'L') => {
                self.pos += 1;
                SyntaxKind::LongLiteral
            }
            Some(b'f' | b'F') => {
                self.pos += 1;
                SyntaxKind::FloatLiteral
            }
            Some(b'd' | b'D') => {
                self.pos += 1;
                SyntaxKind::DoubleLiteral
            }
            _ if saw_dot || saw_exponent => SyntaxKind::DoubleLiteral,
            _ => SyntaxKind::IntLiteral,
        }
    }

    fn ident_or_keyword(&mut self) -> SyntaxKind {
        let start = self.pos;
        while is_ident_continue(self.current_char()) {
            self.bump_char();
        }
        let text = &self.input[start..self.pos];
        SyntaxKind::from_keyword(text).unwrap_or(SyntaxKind::Identifier)
    }

    fn operator(&mut self) -> SyntaxKind {
        let b = self.bytes[self.pos];
        let (len, kind) = match b {
            b'(' => (1, SyntaxKind::LParen),
            b')' => (1, SyntaxKind::RParen),
            b'{' => (1, SyntaxKind::LBrace),
            b'}' => (1, SyntaxKind::RBrace),
            b'[' => (1, SyntaxKind::LBracket),
            b']' => (1, SyntaxKind::RBracket),
            b';' => (1, SyntaxKind::Semicolon),
            b',' => (1, SyntaxKind::Comma),
            b'@' => (1, SyntaxKind::At),
            b'?' => (1, SyntaxKind::Question),
            b':' => match self.peek(1) {
                Some(b':') => (2, SyntaxKind::DoubleColon),
                _ => (1, SyntaxKind::Colon),
            },
            b'+' => match self.peek(1) {
                Some(b'+') => (2, SyntaxKind::PlusPlus),
                Some(b'=') => (2, SyntaxKind::PlusEq),
                _ => (1, SyntaxKind::Plus),
            },
            b'-' => match self.peek(1) {
                Some(b'-') => (2, SyntaxKind::MinusMinus),
                Some(b'=') => (2, SyntaxKind::MinusEq),
                Some(b'>') => (2, SyntaxKind::Arrow),
                _ => (1, SyntaxKind::Minus),
            },
            b'*' => match self.peek(1) {
                Some(b'=') => (2, SyntaxKind::StarEq),
                _ => (1, SyntaxKind::Star),
            },
            b'%' => match self.peek(1) {
                Some(b'=') => (2, SyntaxKind::PercentEq),
                _ => (1, SyntaxKind::Percent),
            },
            b'~' => (1, SyntaxKind::Tilde),
            b'!' => match self.peek(1) {
                Some(b'=') => (2, SyntaxKind::BangEq),
                _ => (1, SyntaxKind::Bang),
            },
            b'=' => match self.peek(1) {
                Some(b'=') => (2, SyntaxKind::EqEq),
                _ => (1, SyntaxKind::Eq),
            },
            b'<' => match (self.peek(1), self.peek(2)) {
                (Some(b'<'), Some(b'=')) => (3, SyntaxKind::LeftShiftEq),
                (Some(b'<'), _) => (2, SyntaxKind::LeftShift),
                (Some(b'='), _) => (2, SyntaxKind::LessEq),
                _ => (1, SyntaxKind::Less),
            },
            b'>' => match (self.peek(1), self.peek(2), self.peek(3)) {
                (Some(b'>'), Some(b'>'), Some(b'=')) => (4, SyntaxKind::UnsignedRightShiftEq),
                (Some(b'>'), Some(b'>'), _) => (3, SyntaxKind::UnsignedRightShift),
                (Some(b'>'), Some(b'='), _) => (3, SyntaxKind::RightShiftEq),
                (Some(b'>'), _, _) => (2, SyntaxKind::RightShift),
                (Some(b'='), _, _) => (2, SyntaxKind::GreaterEq),
                _ => (1, SyntaxKind::Greater),
            },
            b'&' => match self.peek(1) {
                Some(b'&') => (2, SyntaxKind::AmpAmp),
                Some(b'=') => (2, SyntaxKind::AmpEq),
                _ => (1, SyntaxKind::Amp),
            },
            b'|' => match self.peek(1) {
                Some(b'|') => (2, SyntaxKind::PipePipe),
                Some(b'=') => (2, SyntaxKind::PipeEq),
                _ => (1, SyntaxKind::Pipe),
            },
            b'^' => match self.peek(1) {
                Some(b'=') => (2, SyntaxKind::CaretEq),
                _ => (1, SyntaxKind::Caret),
            },
            _ => {
                self.bump_char();
                return SyntaxKind::Error;
            }
        };
        self.pos += len;
        kind
    }

    fn advance_with(&mut self, len: usize, kind: SyntaxKind) -> SyntaxKind {
        self.pos += len;
        kind
    }

    fn peek(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump_char(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }
}

fn is_ident_start(ch: Option<char>) -> bool {
    match ch {
        Some(ch) => ch == '_' || ch == '$' || ch.is_alphabetic(),
        None => false,
    }
}

fn is_ident_continue(ch: Option<char>) -> bool {
    match ch {
        Some(ch) => ch == '_' || ch == '$' || ch.is_alphanumeric(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        lex(input)
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia() && *k != SyntaxKind::Eof)
            .collect()
    }

    #[test]
    fn lexes_string_concatenation() {
        assert_eq!(
            kinds(r#"String s = "a" + "b";"#),
            vec![
                SyntaxKind::Identifier,
                SyntaxKind::Identifier,
                SyntaxKind::Eq,
                SyntaxKind::StringLiteral,
                SyntaxKind::Plus,
                SyntaxKind::StringLiteral,
                SyntaxKind::Semicolon,
            ]
        );
    }

    #[test]
    fn escaped_quote_does_not_terminate_string() {
        let tokens = lex(r#""a\" + b""#);
        assert_eq!(tokens[0].kind, SyntaxKind::StringLiteral);
        assert_eq!(tokens[0].text(r#""a\" + b""#), r#""a\" + b""#);
    }

    #[test]
    fn comments_hide_their_quotes() {
        assert_eq!(kinds("// not \"a string\"\n/* nor \"this\" */"), vec![]);
    }

    #[test]
    fn unterminated_string_is_an_error_token() {
        let tokens = lex("\"oops\nint x;");
        assert_eq!(tokens[0].kind, SyntaxKind::Error);
        assert!(tokens.iter().any(|t| t.kind == SyntaxKind::IntKw));
    }

    #[test]
    fn text_block_is_a_single_token() {
        let src = "String s = \"\"\"\n  line \"quoted\"\n  \"\"\";";
        let tokens: Vec<_> = lex(src)
            .into_iter()
            .filter(|t| t.kind == SyntaxKind::TextBlock)
            .collect();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn maximal_munch_on_plus_operators() {
        assert_eq!(
            kinds("a ++ + += b"),
            vec![
                SyntaxKind::Identifier,
                SyntaxKind::PlusPlus,
                SyntaxKind::Plus,
                SyntaxKind::PlusEq,
                SyntaxKind::Identifier,
            ]
        );
    }

    #[test]
    fn number_shapes() {
        assert_eq!(kinds("0xFF_FFL"), vec![SyntaxKind::LongLiteral]);
        assert_eq!(kinds("1.5e-3"), vec![SyntaxKind::DoubleLiteral]);
        assert_eq!(kinds("2f"), vec![SyntaxKind::FloatLiteral]);
        assert_eq!(kinds("42"), vec![SyntaxKind::IntLiteral]);
    }
}
