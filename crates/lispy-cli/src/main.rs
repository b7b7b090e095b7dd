//! Lispy command-line front end: run files, then optionally a REPL.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use lispy::{eval_str, load_file, Environment, Value};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Parser, Debug)]
#[command(name = "lispy", version, about = "A small Lisp with Q-expressions")]
struct Cli {
    /// Source files to load, in order
    files: Vec<PathBuf>,

    /// Prompt shown by the REPL
    #[arg(long, default_value = "lispy> ")]
    prompt: String,

    /// Skip the REPL banner
    #[arg(short, long)]
    quiet: bool,

    /// Start the REPL even after loading files
    #[arg(long)]
    repl: bool,
}

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut env = Environment::with_prelude();
    tracing::debug!(files = cli.files.len(), repl = cli.repl, "starting");

    for path in &cli.files {
        run_file(&mut env, path);
    }

    if cli.files.is_empty() || cli.repl {
        repl(&mut env, &cli)?;
    }
    Ok(())
}

/// Load one file, printing each failing top-level form's error.
fn run_file(env: &mut Environment, path: &Path) {
    match load_file(env, path) {
        Ok(outcome) => {
            for err in &outcome.errors {
                println!("{}", err);
            }
        }
        Err(err) => println!("{}", Value::from(err)),
    }
}

fn repl(env: &mut Environment, cli: &Cli) -> Result<()> {
    if !cli.quiet {
        println!("Lispy Version {}", lispy::VERSION);
        println!("Press Ctrl+C or Ctrl+D to Exit\n");
    }

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(&cli.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                println!("{}", eval_str(env, &line));
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
