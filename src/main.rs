use std::fs::File;
use std::io::{self, Write};
use std::process;

use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};
use csv::{ReaderBuilder, StringRecord, Trim};
use env_logger::{Builder, Env};
use log::{debug, info};

use cpu_scheduler::report::write_report;
use cpu_scheduler::{simulation, Algorithm, LoadError, Process, ProcessSet, TimeStep, ID};

/// Reads a process file (`id,burst,arrival[,priority]` per line) and
/// returns a `ProcessSet` in file order.
pub fn read_process_file(file_path: &str) -> Result<ProcessSet, LoadError> {
    let file = File::open(file_path).map_err(|source| LoadError::FileOpenFailure {
        path: file_path.to_string(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);
    let mut processes = ProcessSet::new_empty();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());
        if !(3..=4).contains(&record.len()) {
            return Err(LoadError::WrongFieldCount { line, found: record.len() });
        }

        let id: ID = parse_field(&record, 0, "process id", line)?;
        if id == 0 {
            return Err(out_of_range(line, "process id", 0, "positive"));
        }
        let burst: TimeStep = parse_field(&record, 1, "burst duration", line)?;
        if burst <= 0 {
            return Err(out_of_range(line, "burst duration", burst, "positive"));
        }
        let arrival: TimeStep = parse_field(&record, 2, "arrival time", line)?;
        if arrival < 0 {
            return Err(out_of_range(line, "arrival time", arrival, "non-negative"));
        }
        let priority: i64 = if record.len() > 3 {
            parse_field(&record, 3, "priority", line)?
        } else {
            0
        };

        processes.add_process(Process::new(id, burst, arrival, priority));
    }

    Ok(processes)
}

fn parse_field<T: std::str::FromStr>(record: &StringRecord, index: usize, field: &str, line: u64) -> Result<T, LoadError> {
    let value = record.get(index).unwrap_or("");
    value.parse().map_err(|_| LoadError::FieldParseFailure {
        line,
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn out_of_range(line: u64, field: &str, value: i64, expected: &'static str) -> LoadError {
    LoadError::FieldOutOfRange {
        line,
        field: field.to_string(),
        value,
        expected,
    }
}

pub fn build_cli_command() -> Command {
    Command::new("cpu-scheduler")
    .version("0.1.0")
    .about("Simulates FCFS, SJF, priority and round-robin CPU scheduling")
    .disable_version_flag(true)

    .arg(Arg::new("process_file")
        .required(true)
        .help("Path to the process file (id,burst,arrival[,priority] per line)"))

    .arg(Arg::new("algorithm")
        .short('a')
        .long("algorithm")
        .help("Scheduling discipline to report on")
        .value_parser(["fcfs", "sjf", "priority", "rr", "all"])
        .default_value("all"))
}

/// Disciplines selected on the command line, in report order.
fn selected_algorithms(matches: &ArgMatches) -> Result<Vec<Algorithm>, LoadError> {
    match matches.get_one::<String>("algorithm").map(String::as_str) {
        None | Some("all") => Ok(Algorithm::ALL.to_vec()),
        Some(name) => name
            .parse::<Algorithm>()
            .map(|algorithm| vec![algorithm])
            .map_err(LoadError::InvalidArguments),
    }
}

/// Prints the diagnostic of a fatal error.
fn write_diagnostic<W: Write>(w: &mut W, e: &LoadError) -> io::Result<()> {
    writeln!(w, "Error: {}", e)
}

fn fail(e: LoadError) -> ! {
    debug!("{:?}", e);
    let _ = write_diagnostic(&mut io::stderr(), &e);
    process::exit(e.exit_code());
}

fn main() {
    // cargo run <process_file> [-a fcfs|sjf|priority|rr|all]
    // example : cargo run processes.csv -a rr
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    let matches: ArgMatches = match build_cli_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => e.exit(),
        Err(e) => fail(LoadError::InvalidArguments(e.to_string())),
    };

    let algorithms = selected_algorithms(&matches).unwrap_or_else(|e| fail(e));

    let file_path = match matches.get_one::<String>("process_file") {
        Some(path) => path,
        None => fail(LoadError::InvalidArguments("must give a scheduling file to process".to_string())),
    };
    let processes = read_process_file(file_path).unwrap_or_else(|e| fail(e));
    info!("Loaded {} processes from {}", processes.len(), file_path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in simulation::run(&processes, &algorithms) {
        if let Err(e) = write_report(&mut out, &report) {
            eprintln!("Error writing report: {}", e);
            process::exit(1);
        }
    }
}
