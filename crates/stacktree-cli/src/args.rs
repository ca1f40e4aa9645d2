//! Command-line argument definitions for the stacktree CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Flags select the output format and which links are shown;
//! they are OR-ed over the values loaded from the configuration file.

use clap::Parser;

/// Command-line arguments for the stacktree dependency viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the CloudFormation template (YAML or JSON)
    #[arg(help = "Path to the input template")]
    pub input: String,

    /// Show all elements, including those without dependencies
    #[arg(short = 'a', long = "all")]
    pub show_all: bool,

    /// Show dependents (UsedBy) as well as dependencies
    #[arg(short = 'b', long = "both")]
    pub two_way: bool,

    /// Output a GraphViz DOT document instead of a tree
    #[arg(short, long)]
    pub dot: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
