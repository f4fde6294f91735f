use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use fair_split::csv::{CsvError, read_participants, write_transfers};
use fair_split::engine::{EngineError, split};
use fair_split::model::{Config, Group, GroupError};
use fair_split::prompt::{PromptError, Prompter};
use fair_split::report::write_report;
use thiserror::Error;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Split shared expenses evenly and work out who pays whom.
#[derive(Debug, Parser)]
#[command(name = "fair-split", version)]
struct Cli {
    /// CSV file with `name,spent` rows. Prompts interactively when omitted.
    input: Option<PathBuf>,

    /// How to print the result.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Maximum number of participants.
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u64).range(2..))]
    max_people: u64,

    /// Maximum length of a participant name.
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u64).range(1..))]
    max_name_len: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Fixed-width table with spending, balances and transfers
    Text,
    /// `from,to,amount` rows
    Csv,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error(transparent)]
    Group(#[from] GroupError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config {
        max_people: cli.max_people as usize,
        max_name_len: cli.max_name_len as usize,
    };

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: Config) -> Result<(), AppError> {
    let mut group = match cli.input.as_deref() {
        Some(path) => load_group(path, config)?,
        None => Prompter::new(&config, io::stdin().lock(), io::stdout()).read_group()?,
    };

    let summary = split(&mut group)?;

    let stdout = io::stdout();
    match cli.format {
        Format::Text => write_report(&mut stdout.lock(), &group, &summary)?,
        Format::Csv => write_transfers(stdout.lock(), &group, &summary.transfers)?,
    }
    Ok(())
}

/// Build a group from a csv file. Unreadable rows are skipped with a warning.
fn load_group(path: &Path, config: Config) -> Result<Group, AppError> {
    if path.extension().is_none_or(|ext| ext != "csv") {
        warn!(path = %path.display(), "input file seems to not be a csv file");
    }

    let mut group = Group::new(config);
    for result in read_participants(path)? {
        match result {
            Ok((name, spent)) => {
                group.add(name, spent)?;
            }
            Err(e) => {
                warn!("{e}");
            }
        }
    }
    Ok(group)
}
