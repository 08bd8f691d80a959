mod commands;
mod config;
mod gateway;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, init, submit, validate, ApplyArgs, InitArgs, SubmitArgs, ValidateArgs};
use config::Config;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Curriculum CLI - check, edit and submit generated courses
#[derive(Parser, Debug)]
#[command(name = "curriculum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default curriculum.config.json
    Init(InitArgs),

    /// Check course documents against the submit rules
    Validate(ValidateArgs),

    /// Replay a JSON edit script against a course document
    Apply(ApplyArgs),

    /// Validate and submit a course document
    Submit(SubmitArgs),
}

fn init_tracing(cwd: &Path) {
    // RUST_LOG wins over the configured level
    let default_level = Config::load(cwd)
        .map(|config| config.log_level)
        .unwrap_or_else(|_| "info".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    init_tracing(&cwd);

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
        Command::Submit(args) => submit(args, &cwd).await,
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
