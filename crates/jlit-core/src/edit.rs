use thiserror::Error;

use crate::TextRange;

/// A single replacement of `range` with `replacement` in one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub replacement: String,
}

impl TextEdit {
    pub fn replace(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            replacement: text.into(),
        }
    }

    pub fn insert(offset: u32, text: impl Into<String>) -> Self {
        Self::replace(
            TextRange {
                start: offset,
                end: offset,
            },
            text,
        )
    }

    /// Net byte change produced by this edit.
    pub fn delta(&self) -> isize {
        self.replacement.len() as isize - self.range.len() as isize
    }
}

#[derive(Debug, Error)]
pub enum EditError {
    #[error("text edit range {start}..{end} is outside the document bounds (len={len})")]
    OutOfBounds { start: u32, end: u32, len: usize },
    #[error("overlapping edits: {0}..{1} overlaps {2}..{3}")]
    Overlapping(u32, u32, u32, u32),
}

/// Apply non-overlapping edits to `original` and return the modified text.
pub fn apply_text_edits(original: &str, edits: &[TextEdit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(original.to_string());
    }

    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by(|a, b| {
        a.range
            .start
            .cmp(&b.range.start)
            .then_with(|| a.range.end.cmp(&b.range.end))
    });

    for pair in sorted.windows(2) {
        if pair[1].range.start < pair[0].range.end {
            return Err(EditError::Overlapping(
                pair[0].range.start,
                pair[0].range.end,
                pair[1].range.start,
                pair[1].range.end,
            ));
        }
    }

    let mut out = original.to_string();
    for edit in sorted.iter().rev() {
        if edit.range.end as usize > out.len() {
            return Err(EditError::OutOfBounds {
                start: edit.range.start,
                end: edit.range.end,
                len: out.len(),
            });
        }
        out.replace_range(edit.range.start as usize..edit.range.end as usize, &edit.replacement);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn applies_replacement_and_insert() {
        let source = "String s = old;";
        let edits = vec![
            TextEdit::replace(TextRange::new(11, 14), "fresh"),
            TextEdit::insert(15, " // edited"),
        ];
        let applied = apply_text_edits(source, &edits).unwrap();
        assert_eq!(applied, "String s = fresh; // edited");
        // The length change equals the sum of the edit deltas.
        let delta: isize = edits.iter().map(TextEdit::delta).sum();
        assert_eq!(applied.len() as isize, source.len() as isize + delta);
    }

    #[test]
    fn delta_is_signed() {
        assert_eq!(TextEdit::replace(TextRange::new(0, 4), "ab").delta(), -2);
        assert_eq!(TextEdit::insert(0, "ab").delta(), 2);
        assert_eq!(TextEdit::replace(TextRange::new(0, 2), "xy").delta(), 0);
    }

    #[test]
    fn rejects_overlapping_edits() {
        let edits = vec![
            TextEdit::replace(TextRange::new(0, 4), "a"),
            TextEdit::replace(TextRange::new(2, 6), "b"),
        ];
        assert!(matches!(
            apply_text_edits("0123456789", &edits),
            Err(EditError::Overlapping(..))
        ));
    }

    #[test]
    fn rejects_out_of_bounds_edit() {
        let edits = vec![TextEdit::replace(TextRange::new(4, 9), "x")];
        assert!(matches!(
            apply_text_edits("abc", &edits),
            Err(EditError::OutOfBounds { .. })
        ));
    }
}
