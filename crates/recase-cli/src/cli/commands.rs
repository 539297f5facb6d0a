//! Command builders for the CLI.
//!
//! The three conversion commands share one builder; only the name, help
//! text and examples differ.

use clap::Command;
use recase_core::Convention;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("recase")
        .about("Convert identifiers to camelCase, dot.case or kebab-case")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(convert_command(Convention::Camel))
        .subcommand(convert_command(Convention::Dot))
        .subcommand(convert_command(Convention::Kebab))
        .subcommand(conventions_command())
}

/// Convert identifiers to one convention.
pub fn convert_command(convention: Convention) -> Command {
    let (about, examples) = match convention {
        Convention::Camel => (
            "Convert to camelCase",
            r#"EXAMPLES:
  recase camel 'First Name'           # firstName
  recase camel user_id SCREEN_NAME    # userId, screenName
  recase camel -f names.txt --json    # batch, JSON report
  recase camel --json-input 123       # TypeError"#,
        ),
        Convention::Dot => (
            "Convert to dot.case",
            r#"EXAMPLES:
  recase dot SCREEN_NAME              # screen.name
  recase dot 'My name is  Dieko'      # my.name.is.dieko
  cat names.txt | recase dot          # one identifier per line"#,
        ),
        Convention::Kebab => (
            "Convert to kebab-case",
            r#"EXAMPLES:
  recase kebab myVariableName         # my-variable-name
  recase kebab 'First Name'           # first-name"#,
        ),
    };

    Command::new(convention.name())
        .about(about)
        .after_help(examples)
        .arg(inputs_arg())
        .arg(file_arg())
        .arg(json_input_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// List supported conventions.
pub fn conventions_command() -> Command {
    Command::new("conventions")
        .about("List supported conventions")
        .arg(color_arg())
        .arg(verbose_arg())
}
