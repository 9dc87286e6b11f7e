use arithc::ir::TempScope;
use arithc::{compile_with, Mode, Options};

use ariadne::Source;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use yansi::Paint;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// Compiles `name = expression;` statements and prints every phase's output.
#[derive(Parser, Debug)]
#[command(name = "arithc", version)]
struct Cli {
    /// Source file; standard input is read when omitted
    input: Option<PathBuf>,

    /// Accept exactly one statement instead of a statement list
    #[arg(long)]
    single: bool,

    /// Restart temporary numbering at t1 for every statement
    #[arg(long)]
    per_statement_temps: bool,

    /// Write the trace to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable colored section headers
    #[arg(long)]
    no_color: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color || !io::stdout().is_terminal() {
        yansi::disable();
    }

    let (name, source) = match read_source(cli.input.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    if source.trim().is_empty() {
        eprintln!("{} Please enter some source code.", "warning:".yellow().bold());
        return ExitCode::from(2);
    }

    let options = Options {
        mode: if cli.single { Mode::Single } else { Mode::Program },
        temp_scope: if cli.per_statement_temps {
            TempScope::Statement
        } else {
            TempScope::Program
        },
    };
    let compilation = compile_with(&source, &options);

    match &cli.output {
        Some(path) => {
            if let Err(err) = fs::write(path, &compilation.trace) {
                eprintln!("{} cannot write {}: {}", "error:".red().bold(), path.display(), err);
                return ExitCode::FAILURE;
            }
            tracing::info!(path = %path.display(), "trace written");
        }
        None => print_trace(&compilation.trace),
    }

    let Some(error) = compilation.error else {
        return ExitCode::SUCCESS;
    };

    if let Err(err) = error.report(&name).eprint((name.clone(), Source::from(source))) {
        eprintln!("{} cannot render diagnostic: {}", "error:".red().bold(), err);
    }
    ExitCode::FAILURE
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(input: Option<&PathBuf>) -> io::Result<(String, String)> {
    match input {
        Some(path) => Ok((path.display().to_string(), fs::read_to_string(path)?)),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

fn print_trace(trace: &str) {
    for line in trace.lines() {
        if line.starts_with('[') || line == "Source Code:" {
            println!("{}", line.cyan().bold());
        } else if line == "Error:" {
            println!("{}", line.red().bold());
        } else {
            println!("{}", line);
        }
    }
}
