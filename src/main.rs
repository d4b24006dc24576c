//! tasklist - a personal task list in a plain text file

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use tasklist::{App, Config, ConfigOverrides, TaskListError, TaskStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "Interactive task list backed by a plain text file", long_about = None)]
struct Cli {
    /// Task file (defaults to "Task List" in the current directory)
    #[arg(short, long, env = "TASKLIST_FILE")]
    file: Option<PathBuf>,

    /// Config file (defaults to the user config file if it exists)
    #[arg(short, long, env = "TASKLIST_CONFIG")]
    config: Option<PathBuf>,

    /// Write a blank line after every record, like older task files
    #[arg(long)]
    spaced: bool,

    /// Never color warnings, even on a terminal
    #[arg(long)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    let filter = if cli.verbose {
        "tasklist=debug,info"
    } else {
        "tasklist=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        let code = e
            .downcast_ref::<TaskListError>()
            .map_or(1, TaskListError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        file: cli.file,
        spaced: cli.spaced.then_some(true),
        color: cli.no_color.then_some(false),
    };

    let config = Config::resolve(cli.config.as_deref(), overrides)
        .context("Failed to resolve configuration")?;
    tracing::debug!("Resolved config: {:?}", config);

    let store = TaskStore::new(&config.file).with_layout(config.record_layout());
    let color = config.color && io::stdout().is_terminal();

    App::new(store, io::stdin().lock(), io::stdout().lock())
        .with_color(color)
        .run()
        .with_context(|| format!("Task list session failed for {}", config.file.display()))?;

    Ok(())
}
