//! Command-line argument definitions for the Vernissage CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, output format, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output format for the computed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Top-down SVG floor plan of the room
    Svg,
    /// Placements as JSON for a rendering subsystem
    Json,
}

/// Command-line arguments for the Vernissage exhibition layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input exhibit manifest (TOML)
    #[arg(help = "Path to the exhibit manifest")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Path to gallery configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
