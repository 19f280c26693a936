use std::fs;

use camino::Utf8PathBuf;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use toolbox_core::config::{Settings, DEFAULT_MAX_LINES};
use toolbox_core::ffi::{open, CoreError, ToolboxSession};
use toolbox_core::{CalculatorStep, CaseStyle, DiffLineKind, DiffStats, Operator, UnitCategory};

fn write_config(dir: &TempDir, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("toolbox.toml")).expect("utf-8 temp path");
    fs::write(&path, contents).expect("write config");
    path
}

fn session_with_limit(max_lines: usize) -> ToolboxSession {
    let mut settings = Settings::default();
    settings.diff.max_lines = max_lines;
    ToolboxSession::with_settings(settings)
}

#[test]
fn open_reads_config_file() {
    let temp = TempDir::new().expect("tempdir");
    let path = write_config(
        &temp,
        "[diff]\nmax_lines = 3\n\n[telemetry]\nfilter = \"toolbox_core=debug\"\n",
    );

    let session = open(Some(path.to_string())).expect("open session");
    assert_eq!(session.settings().diff.max_lines, 3);
    assert_eq!(session.settings().telemetry.filter, "toolbox_core=debug");

    match session.compare_texts("a\nb\nc\nd".into(), "a".into()) {
        Err(CoreError::InputTooLarge) => {}
        other => panic!("expected size error, got {other:?}"),
    }
}

#[test]
fn open_without_file_uses_defaults() {
    let session = open(None).expect("open session");
    assert_eq!(session.settings().diff.max_lines, DEFAULT_MAX_LINES);
}

#[test]
fn open_reports_missing_or_invalid_config() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("absent.toml");
    match open(Some(missing.to_string_lossy().into_owned())) {
        Err(CoreError::Config) => {}
        other => panic!("expected config error, got {other:?}"),
    }

    let path = write_config(&temp, "[diff]\nmax_lines = 0\n");
    match open(Some(path.to_string())) {
        Err(CoreError::Config) => {}
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn compare_and_render_texts() {
    let session = session_with_limit(10);
    let diff = session
        .compare_texts("line1\nline2\nline3".into(), "line1\nlineX\nline3".into())
        .expect("compare texts");

    assert_eq!(diff.stats, DiffStats::new(1, 1, 2));
    assert!(!diff.stats.is_identical());
    assert_eq!(diff.lines[1].kind, DiffLineKind::Removed);
    assert_eq!(
        session.render_diff(diff.lines),
        "  line1\n- line2\n+ lineX\n  line3"
    );
}

#[test]
fn unit_conversion_through_session() {
    let session = session_with_limit(10);
    assert_eq!(session.convert_units(100.0, "c".into(), "f".into()), Some(212.0));
    assert_eq!(session.convert_units(1.0, "m".into(), "kg".into()), None);

    let conversion = session
        .convert_input(" 2.0 ".into(), "km".into(), "m".into())
        .expect("convert input");
    assert_eq!(conversion.value, 2000.0);
    assert_eq!(conversion.summary, "2.0 Kilometers = 2000 Meters");

    match session.convert_input("abc".into(), "km".into(), "m".into()) {
        Err(CoreError::InvalidNumber) => {}
        other => panic!("expected number error, got {other:?}"),
    }
    match session.convert_input("1".into(), "km".into(), "kg".into()) {
        Err(CoreError::IncompatibleUnits) => {}
        other => panic!("expected category error, got {other:?}"),
    }
    match session.convert_input("1".into(), "furlong".into(), "m".into()) {
        Err(CoreError::UnknownUnit) => {}
        other => panic!("expected unknown unit, got {other:?}"),
    }
}

#[test]
fn unit_pickers() {
    let session = session_with_limit(10);
    let categories = session.unit_categories();
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[1].label, "Weight/Mass");

    let temperatures: Vec<String> = session
        .units_in_category(UnitCategory::Temperature)
        .into_iter()
        .map(|unit| unit.id)
        .collect();
    assert_eq!(temperatures, ["c", "f", "k"]);
}

#[test]
fn text_tools_through_session() {
    let session = session_with_limit(10);
    assert_eq!(
        session.convert_case("hello world".into(), CaseStyle::CamelCase),
        "helloWorld"
    );
    assert_eq!(
        session.format_json("{\"b\":1,\"a\":[true]}".into()).expect("format json"),
        "{\n  \"b\": 1,\n  \"a\": [\n    true\n  ]\n}"
    );
    match session.format_json("   ".into()) {
        Err(CoreError::EmptyInput) => {}
        other => panic!("expected empty input, got {other:?}"),
    }
    match session.format_json("{oops".into()) {
        Err(CoreError::InvalidJson) => {}
        other => panic!("expected invalid json, got {other:?}"),
    }

    let catalog = session.tool_catalog();
    assert!(catalog.iter().any(|tool| tool.id == "text-diff"));
}

#[test]
fn tool_lookup_by_id() {
    let session = session_with_limit(10);
    let calculator = session.find_tool("calculator".into()).expect("calculator listed");
    assert_eq!(calculator.title, "Calculator");
    assert_eq!(session.find_tool("spreadsheet".into()), None);
}

#[test]
fn calculator_through_session() {
    let session = session_with_limit(10);
    let steps = vec![
        CalculatorStep {
            operator: Operator::Add,
            operand: 3.0,
        },
        CalculatorStep {
            operator: Operator::Multiply,
            operand: 4.0,
        },
        CalculatorStep {
            operator: Operator::Divide,
            operand: 3.0,
        },
    ];
    let calculation = session.calculate(2.0, steps).expect("calculate");
    assert_eq!(calculation.value, 6.666_666_667);
    assert_eq!(calculation.display, "6.666666667");

    let steps = vec![CalculatorStep {
        operator: Operator::Divide,
        operand: 0.0,
    }];
    match session.calculate(5.0, steps) {
        Err(CoreError::DivisionByZero) => {}
        other => panic!("expected division error, got {other:?}"),
    }
}
