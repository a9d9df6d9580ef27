//! CLI argument definitions for the intake wizard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use intake_model::BusinessType;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "CSV import wizard for contact and appointment data",
    long_about = "Map, validate, and import contact CSVs for a business vertical.\n\n\
                  Columns are matched to the canonical contact schema, rows are\n\
                  validated against per-vertical rules (including PHI detection for\n\
                  medical data), and imports run as contacts, appointments, reminders."
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

    /// Allow row-level values in logs and reports.
    ///
    /// Off by default: cell contents are replaced with a redaction token
    /// so that PHI never leaks into terminals or log files.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map and validate a CSV without importing anything.
    Analyze(AnalyzeArgs),

    /// Run the full wizard and export the import batches as JSON.
    Import(ImportArgs),

    /// List canonical contact fields and per-vertical requirements.
    Fields,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub file: PathBuf,

    /// Business vertical the data belongs to.
    #[arg(long = "business", value_enum, default_value = "general")]
    pub business: BusinessTypeArg,

    /// Group column to aggregate (default: first detected).
    #[arg(long = "group-column", value_name = "HEADER")]
    pub group_column: Option<String>,

    /// Write the validation findings as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub file: PathBuf,

    /// Business vertical the data belongs to.
    #[arg(long = "business", value_enum, default_value = "general")]
    pub business: BusinessTypeArg,

    /// Directory for the exported JSON batches (default: <CSV_FILE dir>/import).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Minutes before each appointment to schedule its reminder.
    #[arg(long = "reminder-lead", value_name = "MINUTES", default_value_t = 60)]
    pub reminder_lead: i64,

    /// Group column to aggregate (default: first detected).
    #[arg(long = "group-column", value_name = "HEADER")]
    pub group_column: Option<String>,
}

/// Business vertical choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum BusinessTypeArg {
    Medical,
    Salon,
    Restaurant,
    Consultant,
    General,
}

impl From<BusinessTypeArg> for BusinessType {
    fn from(value: BusinessTypeArg) -> Self {
        match value {
            BusinessTypeArg::Medical => BusinessType::Medical,
            BusinessTypeArg::Salon => BusinessType::Salon,
            BusinessTypeArg::Restaurant => BusinessType::Restaurant,
            BusinessTypeArg::Consultant => BusinessType::Consultant,
            BusinessTypeArg::General => BusinessType::General,
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
