use std::{env, fs, path::Path, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, ValueEnum};
use monkey::{lexer::lexer::Lexer, parser::parser::parse, render_error, ErrorReport};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ":: ";

/// What the REPL prints for each line it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every token of the line, one per row
    Tokens,
    /// The parsed program, fully parenthesized, or its errors
    Ast,
}

#[derive(Debug, Parser)]
#[command(name = "monkey", about = "Tokenizer and parser for the monkey language")]
struct Cli {
    /// Source file to parse once; starts the REPL when omitted
    file: Option<PathBuf>,

    /// Output of the REPL
    #[arg(short, long, value_enum, default_value_t = Mode::Tokens)]
    mode: Mode,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.file {
        Some(path) => run_file(&path),
        None => run_repl(cli.mode),
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "monkey=info",
        1 => "monkey=debug",
        _ => "monkey=trace",
    }
}

fn run_file(path: &Path) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to read source");
            eprintln!("Error: could not read {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let (program, errors) = parse(source.as_str(), Some(file_name));

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", ErrorReport::new(error, &source));
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn run_repl(mode: Mode) -> ExitCode {
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("there"));

    println!("Hi {}! Welcome to the monkey programming language!", user);
    println!("Feel free to type commands");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            error!(error = %err, "failed to initialise line editor");
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if let Some(entry) = history_entry(&line) {
                    if let Err(err) = editor.add_history_entry(entry) {
                        debug!(error = %err, "failed to record history");
                    }
                }
                print!("{}", evaluate_line(&line, mode));
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                debug!("leaving repl");
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                error!(error = %err, "failed to read line");
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }
}

/// Lines worth keeping in the editor history; blank lines are skipped.
fn history_entry(line: &str) -> Option<&str> {
    if line.trim().is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Produces the REPL output for one line. Each line gets its own lexer.
fn evaluate_line(line: &str, mode: Mode) -> String {
    match mode {
        Mode::Tokens => Lexer::new(line, None)
            .map(|token| format!("{}\n", token.debug_string()))
            .collect(),
        Mode::Ast => {
            let (program, errors) = parse(line, None);
            if errors.is_empty() {
                format!("{}\n", program)
            } else {
                errors
                    .iter()
                    .map(|error| render_error(error, line))
                    .collect()
            }
        }
    }
}
