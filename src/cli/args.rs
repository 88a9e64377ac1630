//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Minimum dominating sets of rooted forests given as parent-pointer arrays
#[derive(Parser, Debug)]
#[command(name = "domset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .domset.toml
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where to read the parent array from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// File with the parent array (default: stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Parent array given inline, e.g. "None,0,1,2"
    #[arg(short, long, conflicts_with = "file")]
    pub parents: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a minimum dominating set
    Solve {
        #[command(flatten)]
        input: InputArgs,
        /// Output format (default from config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Check the result dominates every node
        #[arg(long)]
        verify: bool,
    },

    /// Show the forest with set members marked '*'
    Tree {
        #[command(flatten)]
        input: InputArgs,
        /// Check the result dominates every node
        #[arg(long)]
        verify: bool,
    },

    /// Validate input and summarize the forest
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print config file locations
    Path,
    /// Print a commented config template
    Template,
}
