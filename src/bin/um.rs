//! `um`: load a program image and run it to completion on the process's
//! real stdin/stdout.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use um::prelude::*;

#[derive(Debug, Parser)]
#[clap(name = "um", about = "An emulator for the Universal Machine register architecture.")]
struct Cli {
    /// Path to a big-endian 32-bit word program image.
    program: PathBuf,

    /// Raise the tracing filter level. Repeatable: -v for info, -vv for
    /// debug, -vvv for trace.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli.program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("um: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(program: &PathBuf) -> Result<(), UmError> {
    let words = load_file(program)?;
    let mut vm = Interpreter::new(words, io::stdin(), io::stdout());

    match vm.run()? {
        ProgramState::Halted => Ok(()),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();
}
