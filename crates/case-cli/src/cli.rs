//! CLI argument definitions for case search and export.

use std::path::PathBuf;

use case_client::DEFAULT_ENDPOINT;
use case_export::{CellPolicy, ExportFormat};
use case_model::CaseFilter;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "case-export",
    version,
    about = "Search case records and export them to CSV or JSON",
    long_about = "Search case records through the case endpoint and export them.\n\n\
                  Results are listed as a table; exports are written as\n\
                  cases_export_<date>.csv or cases_export_<date>.json."
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

    /// Allow case field values (names, emails, phones) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Query the case endpoint and list matching cases.
    Search(SearchArgs),

    /// Export cases saved in a JSON file.
    Export(ExportArgs),

    /// Show every field of one case saved in a JSON file.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Base URL of the case service.
    #[arg(
        long = "endpoint",
        value_name = "URL",
        env = "CASE_EXPORT_ENDPOINT",
        default_value = DEFAULT_ENDPOINT
    )]
    pub endpoint: String,

    /// Export the results after listing them.
    #[arg(long = "export", value_enum, value_name = "FORMAT")]
    pub export: Option<ExportFormatArg>,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Print every field of the result at INDEX (0-based).
    #[arg(long = "details", value_name = "INDEX")]
    pub details: Option<usize>,
}

/// Search filters. Blank values are ignored.
#[derive(Args)]
pub struct FilterArgs {
    #[arg(long = "litigation-id", value_name = "ID")]
    pub litigation_id: Option<String>,

    #[arg(long = "status-id", value_name = "ID")]
    pub status_id: Option<String>,

    #[arg(long = "first-name", value_name = "NAME")]
    pub first_name: Option<String>,

    #[arg(long = "last-name", value_name = "NAME")]
    pub last_name: Option<String>,

    #[arg(long = "email")]
    pub email: Option<String>,

    #[arg(long = "phone")]
    pub phone: Option<String>,

    /// Earliest creation date (YYYY-MM-DD).
    #[arg(long = "date-from", value_name = "DATE")]
    pub date_from: Option<NaiveDate>,

    /// Latest creation date (YYYY-MM-DD).
    #[arg(long = "date-to", value_name = "DATE")]
    pub date_to: Option<NaiveDate>,

    /// Comma-separated tags.
    #[arg(long = "tags")]
    pub tags: Option<String>,

    /// Maximum number of cases to return.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<u32>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> CaseFilter {
        CaseFilter {
            litigation_id: self.litigation_id.clone(),
            status_id: self.status_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            date_from: self.date_from.map(|date| date.format("%Y-%m-%d").to_string()),
            date_to: self.date_to.map(|date| date.format("%Y-%m-%d").to_string()),
            tags: self.tags.clone(),
            limit: self.limit.map(|limit| limit.to_string()),
        }
    }
}

#[derive(Args)]
pub struct OutputArgs {
    /// Directory for export files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Render 0 and false in CSV cells instead of leaving them blank.
    #[arg(long = "keep-falsy")]
    pub keep_falsy: bool,
}

impl OutputArgs {
    pub fn cell_policy(&self) -> CellPolicy {
        if self.keep_falsy {
            CellPolicy::Distinct
        } else {
            CellPolicy::Legacy
        }
    }
}

#[derive(Parser)]
pub struct ExportArgs {
    /// JSON file with an array of cases or a `{"cases": [...]}` response.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Export format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// JSON file with an array of cases or a `{"cases": [...]}` response.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Position of the case in the file (0-based).
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
    Both,
}

impl ExportFormatArg {
    pub fn formats(self) -> &'static [ExportFormat] {
        match self {
            Self::Csv => &[ExportFormat::Csv],
            Self::Json => &[ExportFormat::Json],
            Self::Both => &[ExportFormat::Csv, ExportFormat::Json],
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
