use pretty_assertions::assert_eq;
use toolbox_core::{diff::render, diff_lines, DiffLine, DiffLineKind, DiffStats, TextDiff};

const FIXTURES: &[(&str, &str)] = &[
    ("", ""),
    ("", "one\ntwo"),
    ("one\ntwo", ""),
    ("a\nb\nc\nd", "a\nc\nd\ne"),
    ("same\nsame\nsame", "same\nother\nsame"),
    ("alpha\nbeta\n", "alpha\nbeta"),
    ("x\ny\nz", "p\nq"),
    ("fn main() {\n    run();\n}\n", "fn main() {\n    setup();\n    run();\n}\n"),
    ("  indented\nCase", "indented\ncase"),
];

fn side(lines: &[DiffLine], keep: fn(DiffLineKind) -> bool) -> Vec<&str> {
    lines
        .iter()
        .filter(|line| keep(line.kind))
        .map(|line| line.text.as_str())
        .collect()
}

#[test]
fn filtered_output_reconstructs_both_texts() {
    for (original, changed) in FIXTURES {
        let lines = diff_lines(original, changed);

        let expected_original: Vec<&str> = original.split('\n').collect();
        let expected_changed: Vec<&str> = changed.split('\n').collect();
        assert_eq!(side(&lines, DiffLineKind::in_original), expected_original);
        assert_eq!(side(&lines, DiffLineKind::in_changed), expected_changed);
    }
}

#[test]
fn line_numbers_are_sequential_per_side() {
    for (original, changed) in FIXTURES {
        let lines = diff_lines(original, changed);

        let original_numbers: Vec<u32> = lines.iter().filter_map(|line| line.original_line).collect();
        let changed_numbers: Vec<u32> = lines.iter().filter_map(|line| line.changed_line).collect();

        let expected_original: Vec<u32> = (1..=original.split('\n').count() as u32).collect();
        let expected_changed: Vec<u32> = (1..=changed.split('\n').count() as u32).collect();
        assert_eq!(original_numbers, expected_original);
        assert_eq!(changed_numbers, expected_changed);

        for line in &lines {
            assert_eq!(line.original_line.is_some(), line.kind.in_original());
            assert_eq!(line.changed_line.is_some(), line.kind.in_changed());
        }
    }
}

#[test]
fn identical_texts_are_all_common() {
    let text = "first\n\nthird line\n";
    let lines = diff_lines(text, text);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.kind == DiffLineKind::Common));
}

#[test]
fn empty_texts_yield_single_common_line() {
    assert_eq!(diff_lines("", ""), vec![DiffLine::common("", 1, 1)]);
}

#[test]
fn swapped_pair_keeps_one_common_line() {
    let lines = diff_lines("a\nb", "b\na");
    assert_eq!(
        lines,
        vec![
            DiffLine::removed("a", 1),
            DiffLine::common("b", 2, 1),
            DiffLine::added("a", 2),
        ]
    );
}

#[test]
fn single_line_replacement() {
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
fn disjoint_texts_list_removals_before_additions() {
    let lines = diff_lines("x\ny\nz", "p\nq");
    let kinds: Vec<DiffLineKind> = lines.iter().map(|line| line.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiffLineKind::Removed,
            DiffLineKind::Removed,
            DiffLineKind::Removed,
            DiffLineKind::Added,
            DiffLineKind::Added,
        ]
    );
}

#[test]
fn comparison_is_case_and_whitespace_sensitive() {
    let diff = TextDiff::from_lines(diff_lines("  indented\nCase", "indented\ncase"));
    assert_eq!(diff.stats, DiffStats::new(2, 2, 0));
}

#[test]
fn inserted_line_renders_with_markers() {
    let lines = diff_lines(
        "fn main() {\n    run();\n}",
        "fn main() {\n    setup();\n    run();\n}",
    );
    assert_eq!(
        render(&lines),
        "  fn main() {\n+     setup();\n      run();\n  }"
    );
}
