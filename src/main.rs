use std::{fs, process::ExitCode};

use brewin::{
    error::InterpretError,
    interpreter::console::{Console, ScriptedConsole, StdConsole},
    run_source,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// brewin runs programs written in Brewin, a minimal imperative scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells brewin to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Feeds these lines to `inputi` instead of reading standard input.
    /// May be given more than once.
    #[arg(short, long = "input", value_name = "LINE")]
    inputs: Vec<String>,

    /// Logs every executed statement to standard error.
    #[arg(short, long)]
    trace: bool,

    contents: String,
}

/// Installs the log subscriber.
///
/// `RUST_LOG` is honoured when set; `--trace` forces trace output for this
/// crate. Logs go to stderr so they never mix with program output.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("brewin=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.trace);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mut std_console = StdConsole;
    let mut scripted_console = ScriptedConsole::new(args.inputs.iter().cloned()).with_echo(true);
    let console: &mut dyn Console = if args.inputs.is_empty() {
        &mut std_console
    } else {
        &mut scripted_console
    };

    match run_source(&script, console) {
        Ok(_) => ExitCode::SUCCESS,
        Err(InterpretError::Runtime(e)) => {
            eprintln!("{}: {e}", e.kind());
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
