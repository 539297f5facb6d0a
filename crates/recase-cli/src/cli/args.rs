//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the camel/dot/kebab commands
//! stay in sync.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Identifiers to convert (positional, repeatable).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .num_args(0..)
        .action(ArgAction::Append)
        .help("Identifiers to convert (read from stdin when omitted)")
}

/// Input file, one identifier per line (-f/--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("inputs")
        .help("Read identifiers from file, one per line (use \"-\" for stdin)")
}

/// Treat each input as a JSON literal (--json-input).
pub fn json_input_arg() -> Arg {
    Arg::new("json_input")
        .long("json-input")
        .action(ArgAction::SetTrue)
        .help("Parse each input as a JSON value (non-strings are rejected)")
}

/// Emit a JSON report (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output a JSON array of results")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .requires("json")
        .help("Output compact JSON (default: pretty)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
