//! Command-line argument definitions for the Quill CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, output indentation, and logging verbosity.

use clap::Parser;

use quill::IndentationKind;

/// Command-line arguments for the Quill markup tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input markup source (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output document
    #[arg(short, long, default_value = "out.html")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Indentation of the output: spaces, tabs, spaces:N or tabs:N.
    /// Overrides the configuration file and the source
    #[arg(short, long)]
    pub indentation: Option<IndentationKind>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
