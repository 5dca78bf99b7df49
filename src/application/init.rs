//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new workspace at the specified path and return its config.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::new();
    workspace.save_config(&config)?;

    tracing::info!(root = %path.display(), "initialized workspace");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("plan");

        let config = init(&root).unwrap();
        assert!(config.created.is_some());
        assert!(root.join(".worklane/config.toml").exists());
        assert_eq!(Config::load_from_dir(&root).unwrap(), config);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        let err = init(temp.path()).unwrap_err();
        assert!(err.to_string().contains("already initialized"));
    }
}
