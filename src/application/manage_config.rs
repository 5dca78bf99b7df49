//! Config management use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};

/// Service for reading and editing the workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        self.workspace.load_config()?.get(key)
    }

    /// Set a config value and persist it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;
        config.set(key, value)?;
        self.workspace.save_config(&config)?;
        tracing::debug!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let workspace = Workspace::new(temp.path().to_path_buf());
        workspace.initialize().unwrap();
        workspace.save_config(&Config::new()).unwrap();
        ConfigService::new(workspace)
    }

    #[test]
    fn test_set_persists() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("weeks", "6").unwrap();
        assert_eq!(service.get("weeks").unwrap(), "6");
        assert_eq!(service.list().unwrap().weeks, 6);
    }

    #[test]
    fn test_failed_set_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("weeks", "0").is_err());
        assert_eq!(service.get("weeks").unwrap(), "12");
    }

    #[test]
    fn test_get_created() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(!service.get("created").unwrap().is_empty());
    }
}
