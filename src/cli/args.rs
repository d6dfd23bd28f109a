//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Organization chart builder: infers a unit/seniority hierarchy from HR employee records
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Project directory holding .orgtree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    /// JSON export with employees, units and departments (overrides config)
    #[arg(short = 'f', long = "data", global = true, env = "ORGTREE_DATA", value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the organization chart
    Tree {
        /// Restrict to one department
        #[arg(short, long)]
        department: Option<i64>,
        /// Restrict to one unit (wins over --department)
        #[arg(short, long)]
        unit: Option<i64>,
        /// Output format (default from config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List departments
    Departments,

    /// List units
    Units {
        /// Only units of this department
        #[arg(short, long)]
        department: Option<i64>,
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
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
