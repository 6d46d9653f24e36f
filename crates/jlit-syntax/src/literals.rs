use std::ops::Range;

/// Failure to decode a string-literal token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LiteralError {
    pub message: String,
    /// Byte range within the provided literal text (not file offsets).
    pub span: Range<usize>,
}

fn err(message: impl Into<String>, span: Range<usize>) -> LiteralError {
    LiteralError {
        message: message.into(),
        span,
    }
}

/// Decode a Java string literal (quotes included) into the string value it
/// represents at runtime.
///
/// Handles the full escape table: `\b \t \n \f \r \" \' \\ \s`, octal
/// escapes, and `\uXXXX` unicode escapes (with the legal repeated-`u` form).
/// `""` returns the empty string without running the escape walker.
pub fn decode_string_literal(text: &str) -> Result<String, LiteralError> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes.first() != Some(&b'"') || bytes.last() != Some(&b'"') {
        return Err(err("not a well-formed string literal", 0..text.len()));
    }
    if text.len() == 2 {
        return Ok(String::new());
    }

    let end = text.len() - 1;
    let mut out = String::with_capacity(text.len());
    let mut idx = 1;

    while idx < end {
        let b = bytes[idx];
        match b {
            b'\\' => {
                idx = decode_escape(text, idx, end, &mut out)?;
            }
            b'\n' | b'\r' => {
                return Err(err(
                    "line terminator is not allowed in a string literal",
                    idx..idx + 1,
                ))
            }
            _ => {
                if b < 0x80 {
                    out.push(b as char);
                    idx += 1;
                } else {
                    let ch = text[idx..end].chars().next().unwrap_or('\u{FFFD}');
                    out.push(ch);
                    idx += ch.len_utf8();
                }
            }
        }
    }

    Ok(out)
}

fn decode_escape(
    text: &str,
    idx: usize,
    end: usize,
    out: &mut String,
) -> Result<usize, LiteralError> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes[idx], b'\\');
    if idx + 1 >= end {
        return Err(err("unterminated escape sequence", idx..end));
    }

    let next = bytes[idx + 1];
    match next {
        b'b' => {
            out.push('\u{0008}');
            Ok(idx + 2)
        }
        b't' => {
            out.push('\t');
            Ok(idx + 2)
        }
        b'n' => {
            out.push('\n');
            Ok(idx + 2)
        }
        b'f' => {
            out.push('\u{000C}');
            Ok(idx + 2)
        }
        b'r' => {
            out.push('\r');
            Ok(idx + 2)
        }
        b'"' => {
            out.push('"');
            Ok(idx + 2)
        }
        b'\'' => {
            out.push('\'');
            Ok(idx + 2)
        }
        b'\\' => {
            out.push('\\');
            Ok(idx + 2)
        }
        b's' => {
            out.push(' ');
            Ok(idx + 2)
        }
        b'u' => {
            let mut j = idx + 2;
            while j < end && bytes[j] == b'u' {
                j += 1;
            }
            if j + 4 > end {
                return Err(err("incomplete unicode escape", idx..end));
            }
            let mut value: u32 = 0;
            for k in 0..4 {
                let pos = j + k;
                let digit = hex_value(bytes[pos]).ok_or_else(|| {
                    err(
                        format!("invalid hex digit `{}` in unicode escape", bytes[pos] as char),
                        pos..pos + 1,
                    )
                })?;
                value = (value << 4) | digit as u32;
            }
            let ch = char::from_u32(value)
                .ok_or_else(|| err("unicode escape is not a valid scalar value", idx..j + 4))?;
            out.push(ch);
            Ok(j + 4)
        }
        b'0'..=b'7' => {
            let max_digits = if next <= b'3' { 3 } else { 2 };
            let mut j = idx + 1;
            let mut value: u32 = 0;
            let mut count = 0;
            while count < max_digits && j < end && matches!(bytes[j], b'0'..=b'7') {
                value = value * 8 + (bytes[j] - b'0') as u32;
                j += 1;
                count += 1;
            }
            let ch = char::from_u32(value)
                .ok_or_else(|| err("octal escape is not a valid scalar value", idx..j))?;
            out.push(ch);
            Ok(j)
        }
        _ => Err(err(
            format!("unknown escape sequence `\\{}`", next as char),
            idx..idx + 2,
        )),
    }
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Encode raw text as a minimal valid Java string literal, quotes included.
///
/// Inverse of [`decode_string_literal`]: quotes, backslashes, and control
/// characters are escaped (named escapes where Java has them, `\uXXXX`
/// otherwise); everything else passes through untouched.
pub fn encode_string_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for ch in raw.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 || ch == '\u{007F}' => {
                out.push_str(&format!("\\u{:04x}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}
