use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use rover::{ErrorPolicy, LineKind, LineProcessor, Mission, MissionLoader};
use simplelog::{Config, WriteLogger};
use std::io::{self, Read};
use std::path::Path;

/// Drives rovers across a plateau and prints where each one ends up.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  rover-cli mission.txt
  printf '5 5\\n1 2 N\\nLMLMLMLMM\\n' | rover-cli")]
struct Cli {
    /// The mission file to run. Reads stdin when omitted or `-`.
    input: Option<String>,

    /// Report rejected lines and carry on instead of stopping at the first one
    #[clap(short = 'k', long)]
    keep_going: bool,

    /// Print each accepted line and the rover positions after it
    #[clap(short = 'd', long)]
    debug: bool,

    /// Print the final positions as JSON
    #[clap(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries rover positions.
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = WriteLogger::init(level, Config::default(), io::stderr());

    let content = read_input(cli.input.as_deref())?;
    let policy = if cli.keep_going {
        ErrorPolicy::Continue
    } else {
        ErrorPolicy::Abort
    };

    let mission = if cli.debug {
        MissionLoader::run_with(&content, policy, print_step)
    } else {
        MissionLoader::run(&content, policy)
    }
    .context("Mission aborted")?;

    report(&mission, cli.json)?;

    if !mission.skipped.is_empty() {
        bail!("{} line(s) were rejected", mission.skipped.len());
    }

    Ok(())
}

/// Reads the mission text from a file, or from stdin when no file is given.
fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) if path != "-" => Ok(MissionLoader::read_input(Path::new(path))?),
        _ => {
            if atty::is(atty::Stream::Stdin) {
                bail!("No mission given: pass a file or pipe one in on stdin");
            }
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn print_step(line_number: usize, kind: LineKind, processor: &LineProcessor) {
    println!(
        "Line: {}, Kind: {}, Rovers: [{}]",
        line_number,
        kind,
        processor.output_lines().join(", ")
    );
}

fn report(mission: &Mission, json: bool) -> Result<()> {
    for skipped in &mission.skipped {
        eprintln!(
            "Skipped line {} ({:?}): {}",
            skipped.line_number, skipped.line, skipped.error
        );
    }

    if json {
        let positions = mission.processor.positions();
        println!("{}", serde_json::to_string_pretty(&positions)?);
    } else {
        for line in mission.output_lines() {
            println!("{line}");
        }
    }

    Ok(())
}
