use clap::Parser;
use depfilter::application::dto::OutputFormat;
use std::path::PathBuf;

/// Filter component dependencies by dependency type, settings and an ignore list
#[derive(Parser, Debug)]
#[command(name = "depfilter")]
#[command(version)]
#[command(
    about = "Filter component dependencies by dependency type, resolver settings and an ignore list",
    long_about = None
)]
pub struct Args {
    /// Candidate component names: paths, or '<team project>::<build definition>'
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Dependency type selecting the filter policy (e.g. FileShare, BuildResult)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub dependency_type: Option<String>,

    /// Read additional candidate names from a file, one per line
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Component names that are always excluded
    /// Can be specified multiple times: -i "Legacy" -i "Tools::Old"
    #[arg(short, long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file (defaults to ./depfilter.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}
