//! CLI argument definitions for the composite-table inspector.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use comptab_ingest::{Delimiter, ReadOptions, SubListMode};

#[derive(Parser)]
#[command(
    name = "comptab",
    version,
    about = "Inspect loosely structured text tables",
    long_about = "Read whitespace- or character-delimited text tables with per-column\n\
                  type detection and optional expansion of {a,b,c} sub-list columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read a composite table and summarize its columns.
    Inspect(InspectArgs),

    /// Count total and data lines in a file.
    Count(CountArgs),

    /// Read an all-float table and report per-column ranges.
    Array(ArrayArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Table file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub reader: ReaderArgs,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CountArgs {
    /// File to count.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Lines starting with any of these characters are not data.
    #[arg(long = "skip", default_value = "#")]
    pub skip: String,
}

#[derive(Parser)]
pub struct ArrayArgs {
    /// Table file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Lines starting with any of these characters are skipped.
    #[arg(long = "skip", default_value = "#")]
    pub skip: String,

    /// Field delimiter: a single character, "tab", or "whitespace".
    #[arg(long = "delimiter", default_value = "whitespace")]
    pub delimiter: Delimiter,

    /// 0-based line holding the column names.
    #[arg(long = "header-row", value_name = "LINE")]
    pub header_row: Option<usize>,
}

/// Flags shared by commands that run the composite reader.
#[derive(Args)]
pub struct ReaderArgs {
    /// Lines starting with any of these characters are skipped.
    #[arg(long = "skip", default_value = "#")]
    pub skip: String,

    /// Field delimiter: a single character, "tab", or "whitespace".
    #[arg(long = "delimiter", default_value = "whitespace")]
    pub delimiter: Delimiter,

    /// Columns (0-based) to read as integers.
    #[arg(long = "int-cols", value_delimiter = ',', value_name = "N,...")]
    pub int_cols: Vec<usize>,

    /// Columns (0-based) to keep as raw text.
    #[arg(long = "no-convert", value_delimiter = ',', value_name = "N,...")]
    pub no_convert: Vec<usize>,

    /// Value substituted for unparsable entries in float columns.
    #[arg(long = "blank-value", default_value_t = 0.0, allow_negative_numbers = true)]
    pub blank_value: f64,

    /// How {a,b,c} sub-list fields are handled.
    #[arg(long = "sub-lists", value_enum, default_value = "off")]
    pub sub_lists: SubListArg,

    /// 0-based line holding the column names.
    #[arg(long = "header-row", value_name = "LINE")]
    pub header_row: Option<usize>,

    /// Name suffixes for expanded sub-list columns.
    #[arg(long = "suffixes", value_delimiter = ',', value_name = "S,...")]
    pub suffixes: Option<Vec<String>>,
}

impl ReaderArgs {
    pub fn read_options(&self) -> ReadOptions {
        let mut options = ReadOptions::default()
            .with_skip(self.skip.clone())
            .with_delimiter(self.delimiter)
            .with_int_cols(self.int_cols.iter().copied())
            .with_no_convert(self.no_convert.iter().copied())
            .with_blank_value(self.blank_value)
            .with_sub_lists(self.sub_lists.into());
        if let Some(row) = self.header_row {
            options = options.with_column_row(row);
        }
        if let Some(suffixes) = &self.suffixes {
            options = options.with_sub_list_suffixes(suffixes.iter().cloned());
        }
        options
    }
}

/// CLI sub-list handling choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SubListArg {
    Off,
    Convert,
    Expand,
}

impl From<SubListArg> for SubListMode {
    fn from(value: SubListArg) -> Self {
        match value {
            SubListArg::Off => SubListMode::Off,
            SubListArg::Convert => SubListMode::Convert,
            SubListArg::Expand => SubListMode::Expand,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_flags_map_to_options() {
        let cli = Cli::parse_from([
            "comptab",
            "inspect",
            "table.dat",
            "--int-cols",
            "0,2",
            "--sub-lists",
            "expand",
            "--header-row",
            "1",
            "--suffixes",
            "x,y",
            "--blank-value",
            "-99",
            "--delimiter",
            ",",
        ]);
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        let options = args.reader.read_options();
        assert_eq!(options.int_cols.iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(options.sub_lists, SubListMode::Expand);
        assert_eq!(options.column_row, Some(1));
        assert_eq!(
            options.sub_list_suffixes,
            Some(vec!["x".to_string(), "y".to_string()])
        );
        assert_eq!(options.blank_value, -99.0);
        assert_eq!(options.delimiter, Delimiter::Char(','));
    }

    #[test]
    fn test_defaults_match_reader_defaults() {
        let cli = Cli::parse_from(["comptab", "inspect", "table.dat"]);
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.reader.read_options(), ReadOptions::default());
        assert!(!args.json);
    }
}
