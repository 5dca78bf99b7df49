//! Infrastructure layer - Configuration and workspace files

pub mod config;
pub mod workspace;

pub use config::Config;
pub use workspace::Workspace;
