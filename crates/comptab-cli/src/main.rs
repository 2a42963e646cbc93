//! Composite-table inspector CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use comptab_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use comptab_cli::commands::{run_array, run_count, run_inspect};
use comptab_cli::logging::{LogConfig, LogFormat, init_logging};
use comptab_cli::summary::{print_array_summary, print_line_counts, print_table_summary};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Inspect(args) => run_inspect(args).and_then(|summary| {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_table_summary(&summary);
            }
            Ok(())
        }),
        Command::Count(args) => run_count(args).map(print_line_counts),
        Command::Array(args) => run_array(args).map(|summary| print_array_summary(&summary)),
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
