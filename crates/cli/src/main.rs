use std::collections::VecDeque;
use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{LevelFilter, debug};

mod input;
mod report;

use input::{InputError, parse_values};
use report::{Run, timed_sort, write_report};

const EXAMPLE: &str = "mergeinsert 11 2 17 0 16 8 6 15 10 3 21 1 18 9 14 19 12 5 4 20 13";

fn cli() -> Command {
    Command::new("mergeinsert")
        .about("Sorts non-negative integers by Ford-Johnson merge-insertion")
        .arg(
            Arg::new("values")
                .value_name("VALUES")
                .help("Non-negative integers to sort")
                .num_args(1..)
                .required(true)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("container")
                .long("container")
                .help("Backing container(s) to sort with")
                .value_parser(["vec", "deque", "both"])
                .default_value("both"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print the before/after sequences")
                .action(ArgAction::SetTrue),
        )
        .after_help(format!("Example: {EXAMPLE}"))
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn sort_all(values: &[u32], matches: &ArgMatches) -> Vec<Run> {
    let container = matches
        .get_one::<String>("container")
        .map_or("both", String::as_str);
    debug!("sorting {} values with container={container}", values.len());

    let mut runs = Vec::with_capacity(2);
    if container != "deque" {
        runs.push(timed_sort("Vec", values.to_vec()));
    }
    if container != "vec" {
        runs.push(timed_sort("VecDeque", values.iter().copied().collect::<VecDeque<_>>()));
    }
    runs
}

fn usage_error(err: &InputError) -> ExitCode {
    eprintln!("Error: {err}");
    if *err == InputError::Empty {
        eprintln!("{}", cli().render_usage());
        eprintln!("Example: {EXAMPLE}");
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            return usage_error(&InputError::Empty);
        }
        Err(err) => err.exit(),
    };
    init_logging(matches.get_count("verbose"));

    let raw: Vec<&str> = matches
        .get_many::<String>("values")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();
    let values = match parse_values(&raw) {
        Ok(values) => values,
        Err(err) => return usage_error(&err),
    };

    let runs = sort_all(&values, &matches);
    match write_report(&mut io::stdout().lock(), &values, &runs, matches.get_flag("quiet")) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
