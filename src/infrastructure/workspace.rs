//! Workspace discovery and config storage

use crate::error::{Result, WorklaneError};
use crate::infrastructure::config::{Config, WORKSPACE_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory containing a `.worklane/` folder
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the workspace: `WORKLANE_ROOT` first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("WORKLANE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(WorklaneError::Config(format!(
                    "WORKLANE_ROOT is set to '{}' but no .worklane directory found. \
                    Run 'worklane init' in that directory or unset WORKLANE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory with `.worklane/` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_workspace_dir(dir))
            .map(|dir| Workspace::new(dir.to_path_buf()))
            .ok_or_else(|| WorklaneError::NotWorklaneDirectory(start.to_path_buf()))
    }

    /// Config of the discovered workspace, or defaults when there is none
    pub fn load_config_or_default() -> Result<Config> {
        match Self::discover() {
            Ok(workspace) => {
                tracing::debug!(root = %workspace.root.display(), "using workspace config");
                workspace.load_config()
            }
            Err(WorklaneError::NotWorklaneDirectory(path)) => {
                tracing::debug!(start = %path.display(), "no workspace found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(e),
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    /// Create the `.worklane/` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(WorklaneError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&workspace_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }
}
