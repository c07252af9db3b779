//! # jsoncmp
//!
//! A CLI tool for comparing JSON measurement files side by side.
//!
//! ## Overview
//!
//! jsoncmp is built on top of jsoncmplib and provides a command-line
//! interface for merging a directory of JSON measurement files into one
//! comparison table: a row per file, a column per discovered key, and a
//! `-` wherever a file lacks a value.
//!
//! ## Usage
//!
//! ```bash
//! # Compare all JSON files under ./measurements (grouped columns)
//! jsoncmp ./measurements
//!
//! # Flatten nested keys into underscore paths instead
//! jsoncmp ./measurements --mode flat
//!
//! # Output as JSON or CSV
//! jsoncmp ./measurements --output json
//! jsoncmp ./measurements --output csv
//!
//! # Filter files with glob patterns
//! jsoncmp ./measurements --include "**/run_*.json" --exclude "**/archive/**"
//!
//! # Treat 0, "" and false as missing (legacy renderer semantics)
//! jsoncmp ./measurements --falsy-missing
//! ```

use std::process::ExitCode;
use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};
use jsoncmplib::{compare_directory, CompareOptions, FilterConfig, MissingPolicy, Mode};

mod render;

use render::OutputFormat;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("jsoncmp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare JSON measurement files side by side as a merged table")
        .arg(
            Arg::new("path")
                .help("Directory of JSON files to compare (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_parser(["grouped", "flat"])
                .default_value("grouped")
                .help("Column layout: grouped (one level of groups) or flat (underscore paths)"),
        )
        .arg(
            Arg::new("falsy-missing")
                .long("falsy-missing")
                .action(ArgAction::SetTrue)
                .help("Render 0, empty strings and false as missing cells"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json", "csv"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");

    let mode = matches
        .get_one::<String>("mode")
        .map(|s| Mode::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let missing = if matches.get_flag("falsy-missing") {
        MissingPolicy::FalsyAsMissing
    } else {
        MissingPolicy::AbsentOnly
    };

    let format = matches
        .get_one::<String>("output")
        .map(|s| OutputFormat::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let options = CompareOptions::new()
        .mode(mode)
        .missing(missing)
        .filter(build_filter(matches)?);

    let table = compare_directory(path, options)?;

    render::render(&table, format)
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
