//! CLI argument definitions for the robot catalog guide.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use robo_model::{Flag, GradeLevel, InternetUse};
use robo_query::SortKey;

#[derive(Parser)]
#[command(
    name = "robot-guide",
    version,
    about = "Classroom robot guide - browse, filter and report on the robot catalog",
    long_about = "Browse the classroom robot catalog exported from its spreadsheet as CSV.\n\n\
                  Filter and sort robots, compare purchase costs for a class, and render\n\
                  one-page PDF summaries."
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
    /// List robots matching the filters.
    List(ListArgs),

    /// Show the details-at-a-glance table, cheapest first.
    Glance(GlanceArgs),

    /// Estimate the cost of equipping a class with one robot.
    Estimate(EstimateArgs),

    /// Render one-page PDF reports.
    Report(ReportArgs),

    /// Show how spreadsheet columns were matched to catalog fields.
    Schema(CatalogArgs),

    /// Show the values each filter can take.
    Options(CatalogArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog spreadsheet exported as CSV.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Rows above the header row (the exported sheet has a title row).
    #[arg(long = "skip-rows", value_name = "N", default_value_t = 1)]
    pub skip_rows: usize,
}

#[derive(Args, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name or manufacturer.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    #[arg(long = "manufacturer", value_name = "NAME")]
    pub manufacturer: Option<String>,

    /// Minimum grade level (repeatable): PK, K, 1, 2, ...
    #[arg(long = "grade", value_name = "GRADE", value_parser = parse_grade)]
    pub grades: Vec<GradeLevel>,

    #[arg(long = "rechargeable", value_enum)]
    pub rechargeable: Option<YesNo>,

    #[arg(long = "needs-batteries", value_enum)]
    pub needs_batteries: Option<YesNo>,

    #[arg(long = "set-available", value_enum)]
    pub set_available: Option<YesNo>,

    /// Battery type (repeatable).
    #[arg(long = "battery-type", value_name = "TYPE")]
    pub battery_types: Vec<String>,

    /// Device label (repeatable); matches robots that work with any of them.
    #[arg(long = "device", value_name = "DEVICE")]
    pub devices: Vec<String>,

    #[arg(long = "internet", value_enum)]
    pub internet: Option<InternetArg>,

    #[arg(long = "screen-free", value_enum)]
    pub screen_free: Option<YesNo>,

    #[arg(long = "consumables", value_enum)]
    pub consumables: Option<YesNo>,

    #[arg(long = "visual", value_enum)]
    pub visual: Option<YesNo>,

    #[arg(long = "auditory", value_enum)]
    pub auditory: Option<YesNo>,

    #[arg(long = "fine-motor", value_enum)]
    pub fine_motor: Option<YesNo>,

    #[arg(long = "min-price", value_name = "USD")]
    pub min_price: Option<f64>,

    #[arg(long = "max-price", value_name = "USD")]
    pub max_price: Option<f64>,

    #[arg(long = "min-age", value_name = "YEARS")]
    pub min_age: Option<f64>,

    #[arg(long = "max-age", value_name = "YEARS")]
    pub max_age: Option<f64>,

    #[arg(long = "min-space", value_name = "N")]
    pub min_space: Option<f64>,

    #[arg(long = "max-space", value_name = "N")]
    pub max_space: Option<f64>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Sort key: price, min-age, name or min-grade.
    #[arg(long = "sort", value_name = "KEY", default_value = "name")]
    pub sort: SortKey,

    /// Print the matching records as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct GlanceArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Robot name (case-insensitive).
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// Number of students in the class.
    #[arg(long = "students", value_name = "N", allow_negative_numbers = true)]
    pub students: i64,
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["name", "all"])))]
pub struct ReportArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Render the report for this robot (case-insensitive).
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Render a report for every robot matching the filters.
    #[arg(long = "all")]
    pub all: bool,

    /// Output directory for PDF files.
    #[arg(long = "out", value_name = "DIR", default_value = ".")]
    pub out: PathBuf,

    /// Add a cost estimate table for this many students.
    #[arg(long = "class-size", value_name = "N", value_parser = clap::value_parser!(i64).range(1..))]
    pub class_size: Option<i64>,

    /// Do not download product images.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Seconds allowed for each image download.
    #[arg(long = "image-timeout", value_name = "SECS", default_value_t = 10)]
    pub image_timeout: u64,

    /// Text printed under "Computer Science Standard(s):".
    #[arg(long = "standards", value_name = "TEXT")]
    pub standards: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for Flag {
    fn from(value: YesNo) -> Self {
        match value {
            YesNo::Yes => Flag::Yes,
            YesNo::No => Flag::No,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InternetArg {
    Required,
    NotUsed,
    Optional,
}

impl From<InternetArg> for InternetUse {
    fn from(value: InternetArg) -> Self {
        match value {
            InternetArg::Required => InternetUse::Required,
            InternetArg::NotUsed => InternetUse::NotUsed,
            InternetArg::Optional => InternetUse::Optional,
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

fn parse_grade(value: &str) -> Result<GradeLevel, String> {
    GradeLevel::parse(value).ok_or_else(|| format!("not a grade level: {value}"))
}
