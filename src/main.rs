//! Command-line driver: parses a rover command file, executes every rover and
//! prints the final positions.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use mars_rover::{InterpreterConfig, MarsRover, RoverInterpreter, Traverse, parse_input};
use tracing_subscriber::filter::LevelFilter;

/// Simulate rovers driving across a plateau.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Path to the command file, or `-` to read from stdin.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// How to print the final rover positions.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Stop a rover's remaining commands after its first rejected move.
    #[arg(long)]
    halt_on_rejection: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Disable logging entirely.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `X Y H` line per rover.
    Text,
    /// The full traverse reports as a JSON array.
    Json,
}

impl CliArgs {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    fn open_input(&self) -> Result<Box<dyn BufRead>> {
        if self.input.as_os_str() == "-" {
            return Ok(Box::new(io::stdin().lock()));
        }
        let file = File::open(&self.input)
            .with_context(|| format!("failed to open {}", self.input.display()))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

fn parse_rovers(input: impl BufRead, source: &Path) -> Result<Vec<MarsRover>> {
    parse_input(input).with_context(|| format!("failed to parse {}", source.display()))
}

fn write_text(out: &mut impl Write, traverses: &[Traverse]) -> io::Result<()> {
    for traverse in traverses {
        writeln!(out, "{}", traverse.end)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let input = args.open_input()?;
    let mut rovers = parse_rovers(input, &args.input)?;

    let interpreter = RoverInterpreter::new(InterpreterConfig {
        halt_on_rejection: args.halt_on_rejection,
    });
    let traverses = interpreter.run_all(&mut rovers);

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => write_text(&mut out, &traverses)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &traverses)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars_rover::InputError;

    #[test]
    fn test_parse_failure_keeps_underlying_cause() {
        let err = parse_rovers(io::Cursor::new("1 2 N\nM\n"), Path::new("mission.txt"))
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to parse mission.txt");
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::NoPlateauDimensions)
        ));
    }
}
