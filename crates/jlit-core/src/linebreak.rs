use serde::{Deserialize, Serialize};

/// How a trailing line terminator on a text fragment is rewritten.
///
/// Copy and paste each get their own independent policy selection; see the
/// `LiteralToolsConfig` in the ide crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBreakPolicy {
    /// Rewrite the terminator to `\n`.
    #[default]
    Lf,
    /// Rewrite the terminator to `\r\n`.
    Crlf,
    /// Strip the terminator.
    Remove,
    /// Leave the fragment untouched.
    Preserve,
}

impl LineBreakPolicy {
    fn replacement(self) -> &'static str {
        match self {
            LineBreakPolicy::Lf => "\n",
            LineBreakPolicy::Crlf => "\r\n",
            LineBreakPolicy::Remove => "",
            LineBreakPolicy::Preserve => "",
        }
    }
}

/// Rewrite the trailing line terminator of `text` per `policy`.
///
/// A trailing `\r\n`, `\n`, or `\r` (checked in that order, so CRLF is never
/// mis-read as LF plus a stray CR) is stripped and the policy's replacement
/// appended. Without a trailing terminator the text is returned unchanged
/// unless `force_append` asks for the replacement unconditionally.
/// `Preserve` is a pass-through in all cases.
pub fn normalize_line_break(text: &str, policy: LineBreakPolicy, force_append: bool) -> String {
    if policy == LineBreakPolicy::Preserve {
        return text.to_string();
    }

    let replacement = policy.replacement();
    let stripped = if let Some(prefix) = text.strip_suffix("\r\n") {
        Some(prefix)
    } else if let Some(prefix) = text.strip_suffix('\n') {
        Some(prefix)
    } else if let Some(prefix) = text.strip_suffix('\r') {
        Some(prefix)
    } else {
        None
    };

    match stripped {
        Some(prefix) => format!("{prefix}{replacement}"),
        None if force_append => format!("{text}{replacement}"),
        None => text.to_string(),
    }
}
