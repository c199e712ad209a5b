//! CLI parse: clap types for Pathwalk. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pathwalk CLI - Deterministic path resolution over in-memory node trees
#[derive(Parser)]
#[command(name = "pathwalk")]
#[command(about = "Deterministic path resolution over in-memory node trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Tree literal file (JSON); falls back to the configured literal
    #[arg(long)]
    pub tree: Option<PathBuf>,

    /// Current node for relative paths
    #[arg(long, default_value = "/")]
    pub cwd: String,

    /// Workspace root directory (for config discovery)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a path to a node and print it
    Resolve {
        /// Path to resolve (absolute or relative to --cwd)
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the children of a node
    Ls {
        /// Path to list (defaults to --cwd)
        path: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print file contents
    Cat {
        /// Path to a file node
        path: String,
    },
    /// List completion candidates for a partial path
    Complete {
        /// Partial path to complete
        partial: String,
    },
    /// Render a subtree as an indented listing
    Tree {
        /// Path of the subtree root (defaults to --cwd)
        path: Option<String>,
    },
}
