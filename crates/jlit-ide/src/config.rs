use jlit_core::LineBreakPolicy;
use serde::{Deserialize, Serialize};

/// User-facing configuration for the literal tools.
///
/// Copy and paste keep independent line-break policies: a codebase may want
/// clipboard text normalized to LF while pasted literals encode CRLF for a
/// protocol, or vice versa. Unknown policies fail deserialization rather
/// than falling back silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LiteralToolsConfig {
    /// Applied to each decoded chain segment while copying.
    pub copy_line_break: LineBreakPolicy,
    /// Applied to each non-final clipboard line while pasting.
    pub paste_line_break: LineBreakPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_lf_for_both_directions() {
        let config = LiteralToolsConfig::default();
        assert_eq!(config.copy_line_break, LineBreakPolicy::Lf);
        assert_eq!(config.paste_line_break, LineBreakPolicy::Lf);
    }

    #[test]
    fn deserializes_kebab_case_policies() {
        let config: LiteralToolsConfig =
            serde_json::from_str(r#"{ "copy-line-break": "crlf", "paste-line-break": "remove" }"#)
                .unwrap();
        assert_eq!(config.copy_line_break, LineBreakPolicy::Crlf);
        assert_eq!(config.paste_line_break, LineBreakPolicy::Remove);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: LiteralToolsConfig =
            serde_json::from_str(r#"{ "paste-line-break": "preserve" }"#).unwrap();
        assert_eq!(config.copy_line_break, LineBreakPolicy::Lf);
        assert_eq!(config.paste_line_break, LineBreakPolicy::Preserve);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(serde_json::from_str::<LiteralToolsConfig>(
            r#"{ "copy-line-break": "cr" }"#
        )
        .is_err());
    }
}
