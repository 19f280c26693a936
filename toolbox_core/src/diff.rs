//! Line diffing built on a longest-common-subsequence table.

use crate::{DiffLine, Error, Result, TextDiff};

/// Compare two texts line by line.
///
/// Both texts are split on `'\n'` only, so an empty string is a single empty
/// line and a trailing newline contributes a trailing empty line. Lines match
/// on exact equality. When the table scores tie during backtracking the line
/// is reported as added rather than removed.
#[must_use]
pub fn diff_lines(original: &str, changed: &str) -> Vec<DiffLine> {
    let original: Vec<&str> = original.split('\n').collect();
    let changed: Vec<&str> = changed.split('\n').collect();
    let table = LcsTable::build(&original, &changed);

    let mut lines = Vec::with_capacity(original.len().max(changed.len()));
    let (mut i, mut j) = (original.len(), changed.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == changed[j - 1] {
            lines.push(DiffLine::common(
                original[i - 1],
                line_number(i),
                line_number(j),
            ));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            lines.push(DiffLine::added(changed[j - 1], line_number(j)));
            j -= 1;
        } else {
            lines.push(DiffLine::removed(original[i - 1], line_number(i)));
            i -= 1;
        }
    }

    lines.reverse();
    lines
}

/// Render a listing as plain text with `-`/`+` gutter markers.
#[must_use]
pub fn render(lines: &[DiffLine]) -> String {
    let mut output = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(line.kind.marker());
        output.push_str(&line.text);
    }
    output
}

/// Entry point for text comparisons with an optional size guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    max_lines: Option<usize>,
}

impl DiffEngine {
    /// Construct an engine without a line limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_lines: None }
    }

    /// Construct an engine that rejects texts with more than `max_lines` lines.
    #[must_use]
    pub const fn with_max_lines(max_lines: usize) -> Self {
        Self {
            max_lines: Some(max_lines),
        }
    }

    /// Compare two texts and summarize the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLarge`] when either text exceeds the limit.
    pub fn compare(&self, original: &str, changed: &str) -> Result<TextDiff> {
        self.check("original", original)?;
        self.check("changed", changed)?;
        Ok(TextDiff::from_lines(diff_lines(original, changed)))
    }

    fn check(&self, side: &'static str, text: &str) -> Result<()> {
        let Some(limit) = self.max_lines else {
            return Ok(());
        };

        let lines = line_count(text);
        if lines > limit {
            return Err(Error::InputTooLarge { side, lines, limit });
        }
        Ok(())
    }
}

/// Number of lines `diff_lines` sees in `text`.
#[must_use]
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|byte| *byte == b'\n').count() + 1
}

/// LCS lengths for every prefix pair, `(n + 1) x (m + 1)` cells in row-major order.
struct LcsTable {
    columns: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build(original: &[&str], changed: &[&str]) -> Self {
        let columns = changed.len() + 1;
        let mut cells = vec![0_u32; (original.len() + 1) * columns];

        for (i, line_a) in original.iter().enumerate() {
            let row = i * columns;
            let next_row = row + columns;
            for (j, line_b) in changed.iter().enumerate() {
                cells[next_row + j + 1] = if line_a == line_b {
                    cells[row + j] + 1
                } else {
                    cells[row + j + 1].max(cells[next_row + j])
                };
            }
        }

        Self { columns, cells }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.columns + j]
    }
}

fn line_number(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiffLineKind;

    #[test]
    fn table_counts_common_subsequence() {
        let table = LcsTable::build(&["a", "b", "c", "d"], &["b", "d", "e"]);
        assert_eq!(table.get(4, 3), 2);
        assert_eq!(table.get(0, 3), 0);
        assert_eq!(table.get(2, 1), 1);
    }

    #[test]
    fn replaced_line_is_removed_then_added() {
        let lines = diff_lines("line1\nline2\nline3", "line1\nlineX\nline3");
        assert_eq!(
            lines,
            vec![
                DiffLine::common("line1", 1, 1),
                DiffLine::removed("line2", 2),
                DiffLine::added("lineX", 2),
                DiffLine::common("line3", 3, 3),
            ]
        );
    }

    #[test]
    fn empty_texts_share_one_empty_line() {
        assert_eq!(diff_lines("", ""), vec![DiffLine::common("", 1, 1)]);
    }

    #[test]
    fn trailing_newline_is_a_real_line() {
        let lines = diff_lines("a\n", "a");
        assert_eq!(
            lines,
            vec![DiffLine::common("a", 1, 1), DiffLine::removed("", 2)]
        );
    }

    #[test]
    fn engine_rejects_oversized_input() {
        let engine = DiffEngine::with_max_lines(2);
        let result = engine.compare("a\nb\nc", "a");
        assert!(matches!(
            result,
            Err(Error::InputTooLarge {
                side: "original",
                lines: 3,
                limit: 2
            })
        ));

        let diff = engine.compare("a\nb", "a\nc").expect("within limit");
        assert_eq!(diff.stats.common, 1);
    }

    #[test]
    fn render_marks_each_kind() {
        let lines = diff_lines("keep\nold", "keep\nnew");
        assert_eq!(render(&lines), "  keep\n- old\n+ new");
        assert_eq!(lines[1].kind, DiffLineKind::Removed);
    }

    #[test]
    fn line_count_matches_split() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a\nb\n"), 3);
    }
}
