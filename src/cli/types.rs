//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::analyze::AnalyzeArgs;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "subtext")]
#[command(about = "Subtext - find the requirements people never write down", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Analysis service base URL (overrides configuration)
    #[arg(long, global = true, env = "SUBTEXT_BASE_URL")]
    pub base_url: Option<String>,

    /// Load configuration from this file instead of .subtext/
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze user stories, acceptance criteria and documents
    Analyze(AnalyzeArgs),

    /// Check that the analysis service is reachable
    Health,
}
