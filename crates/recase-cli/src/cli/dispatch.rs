//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use recase_core::Convention;

use super::ColorChoice;
use crate::commands::conventions::ConventionsArgs;
use crate::commands::convert::{ConvertArgs, InputSource, OutputFormat};

pub struct ConvertParams {
    pub convention: Convention,
    pub inputs: Vec<String>,
    pub file: Option<PathBuf>,
    pub json_input: bool,
    pub json: bool,
    pub compact: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches, convention: Convention) -> Self {
        Self {
            convention,
            inputs: m
                .get_many::<String>("inputs")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            file: m.get_one::<PathBuf>("file").cloned(),
            json_input: m.get_flag("json_input"),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        // Positional inputs win; an explicit file comes next; stdin otherwise.
        let source = if !p.inputs.is_empty() {
            InputSource::Args(p.inputs)
        } else {
            match p.file {
                Some(path) if path.as_os_str() != "-" => InputSource::File(path),
                _ => InputSource::Stdin,
            }
        };
        let format = match (p.json, p.compact) {
            (false, _) => OutputFormat::Plain,
            (true, false) => OutputFormat::Json,
            (true, true) => OutputFormat::JsonCompact,
        };
        Self {
            convention: p.convention,
            source,
            json_input: p.json_input,
            format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ConventionsParams {
    pub color: ColorChoice,
    pub verbose: u8,
}

impl ConventionsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ConventionsParams> for ConventionsArgs {
    fn from(p: ConventionsParams) -> Self {
        Self {
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
