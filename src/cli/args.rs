/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// fanstat: list static web-resource libraries and generate HTML/Crossbar config for them.
#[derive(Debug, Parser)]
#[command(
    name = "fanstat",
    about = "List static web-resource libraries and generate HTML and Crossbar config for them",
    version,
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Registration manifest. Defaults to the nearest fanstat.toml.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Output format for list, libs and cont.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "plain")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Print timings and load events to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Show version.
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain text, one record per line.
    #[default]
    Plain,
    /// Aligned table with headers.
    Table,
    /// JSON array (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all packages for which resources exist.
    List,
    /// List all libraries.
    Libs,
    /// List contents of all libraries.
    Cont(ContArgs),
    /// Generate Crossbar static config for libraries.
    Crossbar(CrossbarArgs),
    /// Generate HTML for JS & CSS inclusion.
    Html(HtmlArgs),
}

/// Arguments for `fanstat cont`.
#[derive(Debug, Parser)]
pub struct ContArgs {
    /// Library names (accepted, not applied).
    #[arg(value_name = "LIB")]
    pub libs: Vec<String>,

    /// List only css resources (accepted, not applied).
    #[arg(short, long)]
    pub css: bool,

    /// Only js (accepted, not applied).
    #[arg(short, long, conflicts_with = "css")]
    pub js: bool,
}

/// Arguments for `fanstat crossbar`.
#[derive(Debug, Parser)]
pub struct CrossbarArgs {
    /// Library names (accepted, not applied: every library is emitted).
    #[arg(value_name = "LIB")]
    pub libs: Vec<String>,

    /// Set the URL path prefix for generated items.
    #[arg(short, long, value_name = "PATH")]
    pub prefix: Option<String>,
}

/// Arguments for `fanstat html`.
#[derive(Debug, Parser)]
pub struct HtmlArgs {
    /// Limit to given library names (in dependency order).
    #[arg(value_name = "LIB")]
    pub libs: Vec<String>,

    /// Set the URL path prefix for generated items.
    #[arg(short, long, value_name = "PATH")]
    pub prefix: Option<String>,

    /// Link to full (uncompressed) files.
    #[arg(short, long)]
    pub full: bool,
}
