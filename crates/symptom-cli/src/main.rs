//! Symptom identifier CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use symptom_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, ShellArgs};
use symptom_cli::commands::{ShowOutcome, finish, run_add, run_identify, run_list, run_shell, run_show};
use symptom_cli::logging::{LogConfig, LogFormat, init_logging};
use symptom_match::IdentifyOptions;
use symptom_store::{JsonFileStore, default_db_path};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let store = JsonFileStore::new(cli.db.clone().unwrap_or_else(default_db_path));
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let result = match &cli.command {
        Some(Command::Identify(args)) => {
            run_identify(&store, cli.similarity, args, stdin, &mut stdout).map(|()| 0)
        }
        Some(Command::List(args)) => run_list(&store, args, &mut stdout).map(|()| 0),
        Some(Command::Show(args)) => run_show(&store, args, &mut stdout).map(|outcome| {
            if outcome == ShowOutcome::Found { 0 } else { 1 }
        }),
        Some(Command::Add(args)) => run_add(&store, args, &mut stdout).map(|()| 0),
        Some(Command::Shell(args)) => {
            run_shell(&store, cli.similarity, args, stdin, &mut stdout).map(|()| 0)
        }
        None => {
            let defaults = IdentifyOptions::default();
            let args = ShellArgs {
                top: defaults.top_n,
                min_confidence: defaults.min_confidence,
            };
            run_shell(&store, cli.similarity, &args, stdin, &mut stdout).map(|()| 0)
        }
    };
    std::process::exit(finish(result, &mut stdout));
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
