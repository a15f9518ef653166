//! `enigma` command-line simulator.
//!
//! ```text
//! enigma <CONFIG> [INPUT] [OUTPUT]
//! ```
//!
//! Reads the machine description from CONFIG, then setting and message
//! lines from INPUT (standard input when omitted), and writes converted
//! messages in groups of five to OUTPUT (standard output when omitted).
//! Any error is reported on standard error and exits with status 1.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use enigma::{MachineConfig, Session};

/// Rotor cipher machine simulator.
#[derive(Debug, Parser)]
#[command(name = "enigma", version, about)]
struct Args {
    /// Machine configuration file.
    config: PathBuf,
    /// Messages to process; standard input when omitted.
    input: Option<PathBuf>,
    /// Destination for processed messages; standard output when omitted.
    output: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let text = fs::read_to_string(&args.config)
        .with_context(|| format!("could not open {}", args.config.display()))?;
    let config = MachineConfig::parse(&text)
        .with_context(|| format!("bad configuration in {}", args.config.display()))?;
    debug!(config = %args.config.display(), "machine configured");

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut session = Session::new(config.build()?);
    session.process(input, output)?;
    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            eprint!("{}", err);
            process::exit(1);
        }
        Err(err) => err.exit(),
    };
    init_tracing();
    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
