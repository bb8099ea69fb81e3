use std::{fs, process::ExitCode};

use clap::{Parser, ValueEnum};
use quill::{
    Outcome, analyze,
    error::Error,
    interpret,
    interpreter::lexer::tokenize,
    run,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// What to do with the parsed program.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Check declarations and print the symbol table.
    Check,
    /// Evaluate the program without checking declarations.
    Interpret,
    /// Check declarations, then evaluate.
    Run,
}

/// quill is a small imperative teaching language with integer and float
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Which pipeline to run on the program.
    #[arg(short, long, value_enum, default_value_t = Mode::Check)]
    mode: Mode,

    /// Print the token stream before running the pipeline.
    #[arg(short, long)]
    tokens: bool,

    /// Pipe mode prints every variable left in the runtime environment
    /// after evaluation.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

fn main() -> ExitCode {
    initialize_logging();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };
    debug!(mode = ?args.mode, source_len = script.len(), "Loaded program");

    match execute(&args, &script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", e.kind());
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args, script: &str) -> Result<(), Error> {
    if args.tokens {
        for (token, line) in tokenize(script)? {
            println!("{line:>4}  {token}");
        }
    }

    match args.mode {
        Mode::Check => {
            println!("{}", analyze(script)?);
        },
        Mode::Interpret => print_outcome(&interpret(script)?, args.pipe_mode),
        Mode::Run => print_outcome(&run(script)?, args.pipe_mode),
    }
    Ok(())
}

fn print_outcome(outcome: &Outcome, pipe_mode: bool) {
    if let Some(value) = outcome.result {
        println!("{value}");
    }
    if pipe_mode {
        let mut names: Vec<_> = outcome.variables.keys().collect();
        names.sort();
        for name in names {
            println!("{name} = {}", outcome.variables[name]);
        }
    }
}

fn initialize_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}
