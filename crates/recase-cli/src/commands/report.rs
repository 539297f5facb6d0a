//! Per-input results and their plain/JSON rendering.

use recase_core::{Colors, Convention, convert_value};
use serde::Serialize;
use serde_json::Value;

/// Outcome of converting one input.
#[derive(Debug, Serialize)]
pub struct Record {
    pub input: Value,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Output(String),
    Error(Failure),
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub kind: &'static str,
    pub message: String,
}

impl Record {
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }
}

/// A rendered line and the stream it belongs to.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Stdout(String),
    Stderr(String),
}

/// Convert every input, keeping going past failures.
///
/// With `json_input`, each input is first parsed as a JSON literal; a parse
/// failure is recorded as a `JsonError` and the raw text is echoed back.
pub fn convert_all(inputs: &[String], convention: Convention, json_input: bool) -> Vec<Record> {
    inputs
        .iter()
        .map(|raw| {
            let input = if json_input {
                match serde_json::from_str::<Value>(raw) {
                    Ok(value) => value,
                    Err(e) => {
                        return Record {
                            input: Value::String(raw.clone()),
                            outcome: Outcome::Error(Failure {
                                kind: "JsonError",
                                message: format!("invalid JSON input: {e}"),
                            }),
                        };
                    }
                }
            } else {
                Value::String(raw.clone())
            };

            let outcome = match convert_value(&input, convention) {
                Ok(output) => Outcome::Output(output),
                Err(e) => Outcome::Error(Failure {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            };
            Record { input, outcome }
        })
        .collect()
}

pub fn render_plain(record: &Record, colors: Colors) -> Line {
    match &record.outcome {
        Outcome::Output(output) => Line::Stdout(format!("{}{output}{}", colors.green, colors.reset)),
        Outcome::Error(failure) => Line::Stderr(format!(
            "{}error{}: {} {}(input: {}){}",
            colors.red, colors.reset, failure.message, colors.dim, record.input, colors.reset
        )),
    }
}

pub fn render_json(records: &[Record], compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(records)
    } else {
        serde_json::to_string_pretty(records)
    };
    // Records hold only strings and JSON values; serialization cannot fail.
    rendered.unwrap_or_else(|e| unreachable!("report serialization failed: {e}"))
}
