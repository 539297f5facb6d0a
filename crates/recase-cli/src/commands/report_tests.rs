use recase_core::{Colors, Convention};
use serde_json::json;

use super::report::{Line, Outcome, convert_all, render_json, render_plain};

fn inputs(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn converts_each_input() {
    let records = convert_all(&inputs(&["First Name", "user_id"]), Convention::Camel, false);
    let outputs: Vec<_> = records
        .iter()
        .map(|r| match &r.outcome {
            Outcome::Output(s) => s.as_str(),
            Outcome::Error(f) => f.message.as_str(),
        })
        .collect();
    assert_eq!(outputs, ["firstName", "userId"]);
    assert!(records.iter().all(|r| !r.is_error()));
}

#[test]
fn failures_do_not_stop_the_batch() {
    let records = convert_all(&inputs(&["   ", "SCREEN_NAME"]), Convention::Dot, false);
    assert!(records[0].is_error());
    assert!(!records[1].is_error());
}

#[test]
fn json_report() {
    let records = convert_all(&inputs(&["First Name", "   "]), Convention::Camel, false);
    insta::assert_snapshot!(render_json(&records, false), @r#"
    [
      {
        "input": "First Name",
        "output": "firstName"
      },
      {
        "input": "   ",
        "error": {
          "kind": "EmptyInputError",
          "message": "Input cannot be empty or whitespace only"
        }
      }
    ]
    "#);
}

#[test]
fn compact_json_report() {
    let records = convert_all(&inputs(&["myVariableName"]), Convention::Kebab, false);
    insta::assert_snapshot!(
        render_json(&records, true),
        @r#"[{"input":"myVariableName","output":"my-variable-name"}]"#
    );
}

#[test]
fn json_input_rejects_non_strings() {
    let records = convert_all(
        &inputs(&["123", r#""user_id""#, "null"]),
        Convention::Camel,
        true,
    );
    let value: serde_json::Value =
        serde_json::from_str(&render_json(&records, true)).unwrap();
    assert_eq!(
        value,
        json!([
            {"input": 123, "error": {"kind": "TypeError", "message": "Input must be a string"}},
            {"input": "user_id", "output": "userId"},
            {"input": null, "error": {"kind": "TypeError", "message": "Input must be a string"}}
        ])
    );
}

#[test]
fn json_input_reports_parse_errors() {
    let records = convert_all(&inputs(&["{oops"]), Convention::Dot, true);
    assert_eq!(records[0].input, json!("{oops"));
    match &records[0].outcome {
        Outcome::Error(failure) => {
            assert_eq!(failure.kind, "JsonError");
            assert!(failure.message.starts_with("invalid JSON input: "));
        }
        Outcome::Output(s) => panic!("expected a failure, got {s:?}"),
    }
}

#[test]
fn plain_lines_without_color() {
    let records = convert_all(&inputs(&["First Name", "   "]), Convention::Camel, false);
    assert_eq!(
        render_plain(&records[0], Colors::OFF),
        Line::Stdout("firstName".to_string())
    );
    insta::assert_debug_snapshot!(
        render_plain(&records[1], Colors::OFF),
        @r#"
    Stderr(
        "error: Input cannot be empty or whitespace only (input: \"   \")",
    )
    "#
    );
}

#[test]
fn plain_lines_with_color() {
    let records = convert_all(&inputs(&["user_id"]), Convention::Dot, false);
    assert_eq!(
        render_plain(&records[0], Colors::ON),
        Line::Stdout("\x1b[32muser.id\x1b[0m".to_string())
    );
}
