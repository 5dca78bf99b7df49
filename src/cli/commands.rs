//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "worklane")]
#[command(about = "Team workload timeline planner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q warn, -qq error)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show the team timeline
    Timeline {
        /// First visible day (YYYY-MM-DD, default: config start_date)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// Number of visible weeks (default: config weeks)
        #[arg(long)]
        weeks: Option<u32>,

        /// Filter by employee, title, description or project
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show one department
        #[arg(short, long)]
        department: Option<String>,

        /// Show one ISO week with wide days (e.g., 2026-W07)
        #[arg(short, long, value_name = "WEEK")]
        expand: Option<String>,
    },

    /// Show the profile, tasks and workload of one employee
    Employee {
        /// Employee id (e.g., EMP-SO-02)
        id: String,

        /// First visible day (YYYY-MM-DD, default: config start_date)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// Number of visible weeks (default: config weeks)
        #[arg(long)]
        weeks: Option<u32>,
    },

    /// List the public holidays of a year
    Holidays {
        year: i32,
    },

    /// Print the generated demo dataset
    Generate {
        #[arg(short, long, value_enum, default_value_t = DataFormat::Json)]
        format: DataFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
}
