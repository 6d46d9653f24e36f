//! End-to-end copy/paste scenarios over realistic Java snippets.

use jlit_core::{apply_text_edits, Interval, LineBreakPolicy};
use jlit_ide::{copy_literals, paste_as_literals, CopyOutcome, LiteralToolsConfig};
use pretty_assertions::assert_eq;

fn caret_at(source: &str, pattern: &str) -> Interval {
    let offset = source.find(pattern).expect("pattern present") as u32 + 1;
    Interval::new(offset, offset).unwrap()
}

fn copied_text(outcome: CopyOutcome) -> String {
    match outcome {
        CopyOutcome::Copied { text, .. } => text,
        other => panic!("expected Copied, got {other:?}"),
    }
}

#[test]
fn copy_from_a_realistic_method_body() {
    let source = r#"
public class Greeter {
    public String greet(String name) {
        String message = "Hello, " + name + "! Welcome to " + PLACE + ".";
        return message;
    }
}
"#;
    let config = LiteralToolsConfig::default();
    let outcome = copy_literals(source, caret_at(source, "Welcome"), &config).unwrap();
    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            text: "Hello, name! Welcome to PLACE.".to_string(),
            segments: 5,
        }
    );
}

#[test]
fn copy_sql_split_across_lines() {
    let source = "String query = \"SELECT id, name\\n\" +\n    \
                   \"FROM users\\n\" +\n    \
                   \"WHERE active = 1\";";
    let config = LiteralToolsConfig::default();
    let outcome = copy_literals(source, caret_at(source, "FROM"), &config).unwrap();
    assert_eq!(
        copied_text(outcome),
        "SELECT id, name\nFROM users\nWHERE active = 1"
    );
}

#[test]
fn copy_policies_rewrite_multi_line_output() {
    let source = "String s = \"one\\n\" +\n    \"two\";";
    let crlf = LiteralToolsConfig {
        copy_line_break: LineBreakPolicy::Crlf,
        ..LiteralToolsConfig::default()
    };
    let outcome = copy_literals(source, caret_at(source, "one"), &crlf).unwrap();
    assert_eq!(copied_text(outcome), "one\r\ntwo");

    let remove = LiteralToolsConfig {
        copy_line_break: LineBreakPolicy::Remove,
        ..LiteralToolsConfig::default()
    };
    let outcome = copy_literals(source, caret_at(source, "one"), &remove).unwrap();
    assert_eq!(copied_text(outcome), "onetwo");
}

#[test]
fn range_selection_ignores_untouched_chain_members() {
    let source = r#"String s = "alpha" + "beta" + "gamma";"#;
    let start = source.find("alpha").unwrap() as u32;
    let end = source.find("beta").unwrap() as u32 + 1;
    let config = LiteralToolsConfig::default();
    let outcome =
        copy_literals(source, Interval::new(start, end).unwrap(), &config).unwrap();
    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            text: "alphabeta".to_string(),
            segments: 2,
        }
    );
}

#[test]
fn copy_outside_literals_reports_no_literal() {
    let source = r#"int total = count * 2;"#;
    let config = LiteralToolsConfig::default();
    let outcome =
        copy_literals(source, Interval::new(4, 9).unwrap(), &config).unwrap();
    assert_eq!(outcome, CopyOutcome::NoLiteral);
}

#[test]
fn paste_multi_line_at_caret_builds_a_chain() {
    let source = "String query = ;";
    let offset = source.find(';').unwrap() as u32;
    let config = LiteralToolsConfig {
        paste_line_break: LineBreakPolicy::Crlf,
        ..LiteralToolsConfig::default()
    };
    let edit = paste_as_literals(
        source,
        Interval::new(offset, offset).unwrap(),
        "line1\nline2",
        &config,
    )
    .unwrap();
    assert_eq!(
        apply_text_edits(source, &[edit]).unwrap(),
        "String query = \"line1\\r\\n\"\n+ \"line2\";"
    );
}

#[test]
fn paste_into_an_existing_literal_splices() {
    let source = r#"String s = "HelloWorld";"#;
    let offset = source.find("World").unwrap() as u32;
    let config = LiteralToolsConfig::default();
    let edit = paste_as_literals(
        source,
        Interval::new(offset, offset).unwrap(),
        ", dear ",
        &config,
    )
    .unwrap();
    assert_eq!(
        apply_text_edits(source, &[edit]).unwrap(),
        r#"String s = "Hello, dear World";"#
    );
}

#[test]
fn paste_multi_line_into_a_literal_splits_it() {
    let source = r#"String s = "AB";"#;
    let offset = source.find('B').unwrap() as u32;
    let config = LiteralToolsConfig::default();
    let edit = paste_as_literals(
        source,
        Interval::new(offset, offset).unwrap(),
        "one\ntwo",
        &config,
    )
    .unwrap();
    assert_eq!(
        apply_text_edits(source, &[edit]).unwrap(),
        "String s = \"Aone\\n\"\n+ \"twoB\";"
    );
}

#[test]
fn paste_replaces_a_range_selection() {
    let source = r#"String s = "old";"#;
    let start = source.find('"').unwrap() as u32;
    let end = source.rfind('"').unwrap() as u32 + 1;
    let config = LiteralToolsConfig::default();
    let edit = paste_as_literals(
        source,
        Interval::new(start, end).unwrap(),
        "new",
        &config,
    )
    .unwrap();
    assert_eq!(
        apply_text_edits(source, &[edit]).unwrap(),
        r#"String s = "new";"#
    );
}

#[test]
fn copy_then_paste_round_trips_a_chain() {
    let source = "String s = \"first\\n\" +\n    \"second\";";
    let config = LiteralToolsConfig::default();
    let text = copied_text(copy_literals(source, caret_at(source, "first"), &config).unwrap());
    assert_eq!(text, "first\nsecond");

    let target = "String t = ;";
    let offset = target.find(';').unwrap() as u32;
    let edit = paste_as_literals(
        target,
        Interval::new(offset, offset).unwrap(),
        &text,
        &config,
    )
    .unwrap();
    assert_eq!(
        apply_text_edits(target, &[edit]).unwrap(),
        "String t = \"first\\n\"\n+ \"second\";"
    );
}
