//! CLI layer - Command-line interface

pub mod commands;
pub mod logging;
pub mod output;

pub use commands::{Cli, Commands, DataFormat};
pub use logging::init_tracing;
pub use output::{format_config, format_employee_details, format_holidays, format_timeline};
