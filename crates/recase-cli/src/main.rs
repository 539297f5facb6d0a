mod cli;
mod commands;

use clap::ArgMatches;
use log::LevelFilter;
use recase_core::Convention;

use cli::{ConventionsParams, ConvertParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("camel", m)) => run_convert(m, Convention::Camel),
        Some(("dot", m)) => run_convert(m, Convention::Dot),
        Some(("kebab", m)) => run_convert(m, Convention::Kebab),
        Some(("conventions", m)) => {
            let params = ConventionsParams::from_matches(m);
            init_logging(params.verbose);
            commands::conventions::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn run_convert(m: &ArgMatches, convention: Convention) {
    let params = ConvertParams::from_matches(m, convention);
    init_logging(params.verbose);
    commands::convert::run(params.into());
}

/// `-v` forces debug, `-vv` trace; otherwise `RUST_LOG` decides.
fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    let level = match verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}
