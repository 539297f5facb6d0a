use std::path::PathBuf;

use recase_core::{Colors, Convention};

use super::input_loader::load_inputs;
use super::report::{Line, convert_all, render_json, render_plain};

#[derive(Debug, PartialEq, Eq)]
pub enum InputSource {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
    JsonCompact,
}

pub struct ConvertArgs {
    pub convention: Convention,
    pub source: InputSource,
    pub json_input: bool,
    pub format: OutputFormat,
    pub color: bool,
}

pub fn run(args: ConvertArgs) {
    let inputs = load_inputs(&args.source).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    log::debug!(
        "converting {} input(s) from {:?} to {}",
        inputs.len(),
        args.source,
        args.convention
    );

    let records = convert_all(&inputs, args.convention, args.json_input);
    let failed = records.iter().filter(|r| r.is_error()).count();

    match args.format {
        OutputFormat::Plain => {
            let colors = Colors::new(args.color);
            for record in &records {
                match render_plain(record, colors) {
                    Line::Stdout(line) => println!("{line}"),
                    Line::Stderr(line) => eprintln!("{line}"),
                }
            }
        }
        OutputFormat::Json | OutputFormat::JsonCompact => {
            println!(
                "{}",
                render_json(&records, args.format == OutputFormat::JsonCompact)
            );
        }
    }

    if failed > 0 {
        log::debug!("{failed} of {} input(s) failed", records.len());
        std::process::exit(1);
    }
}
