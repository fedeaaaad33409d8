mod config;
mod generate;
mod prompt;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use reactgen::report;

use crate::config::Config;

#[derive(Parser)]
#[command(version)]
#[command(verbatim_doc_comment)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(about = "Scaffold a React + Vite project with routing, styling and packages wired in")]
struct Cli {
    #[arg(help = "Name of the project to create. Prompts for every choice when omitted.")]
    name: Option<String>,

    #[arg(
        short = 'h',
        long = "help",
        help = "Print this help message.",
        action = ArgAction::Help,
    )]
    help: Option<bool>,

    #[arg(
        short = 'V',
        long = "version",
        help = "Print version information.",
        action = ArgAction::Version,
    )]
    version: Option<bool>,
}

pub(crate) struct App {
    cli: Cli,
    config: Config,
}

impl App {
    fn init(cli: Cli) -> Result<Self> {
        let config = Config::init().context("failed to initialize config")?;
        Ok(Self { cli, config })
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("REACTGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    // Prompts need a terminal; without one the name must come from argv.
    if cli.name.is_none() && !console::user_attended() {
        report::failure("missing project name (usage: reactgen <NAME>)");
        return ExitCode::FAILURE;
    }

    match App::init(cli).and_then(|app| app.generate()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::failure(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
