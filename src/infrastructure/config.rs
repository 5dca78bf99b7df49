//! Configuration management

use crate::domain::geometry::{WidthSettings, DEFAULT_DAY_WIDTH, DEFAULT_EXPANDED_DAY_WIDTH};
use crate::domain::placement::DEMO_SEED;
use crate::error::{Result, WorklaneError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the workspace directory holding config.toml
pub const WORKSPACE_DIR: &str = ".worklane";

/// Keys accepted by `worklane config`
pub const CONFIG_KEYS: [&str; 5] = ["start_date", "weeks", "day_width", "expanded_day_width", "seed"];

/// Longest window, in weeks (ten years)
pub const MAX_WEEKS: u32 = 520;

/// Widest day, in pixels. `MAX_DAY_WIDTH * MAX_WEEKS * 7` stays within `u32`.
pub const MAX_DAY_WIDTH: u32 = 10_000;

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 2).unwrap_or_default()
}

fn default_weeks() -> u32 {
    12
}

fn default_day_width() -> u32 {
    DEFAULT_DAY_WIDTH
}

fn default_expanded_day_width() -> u32 {
    DEFAULT_EXPANDED_DAY_WIDTH
}

fn default_seed() -> u64 {
    DEMO_SEED
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// First day of the demo schedule and of the default window
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    /// Window length in weeks
    #[serde(default = "default_weeks")]
    pub weeks: u32,
    #[serde(default = "default_day_width")]
    pub day_width: u32,
    #[serde(default = "default_expanded_day_width")]
    pub expanded_day_width: u32,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_date: default_start_date(),
            weeks: default_weeks(),
            day_width: default_day_width(),
            expanded_day_width: default_expanded_day_width(),
            seed: default_seed(),
            created: None,
        }
    }
}

impl Config {
    /// Create a new config with default values, stamped with the creation time
    pub fn new() -> Self {
        Config {
            created: Some(Utc::now()),
            ..Config::default()
        }
    }

    /// Window length in days
    pub fn total_days(&self) -> usize {
        self.weeks as usize * 7
    }

    pub fn width_settings(&self) -> WidthSettings {
        WidthSettings {
            day_width: self.day_width,
            expanded_day_width: self.expanded_day_width,
        }
    }

    /// Load config from .worklane/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WorklaneError::NotWorklaneDirectory(path.to_path_buf())
            } else {
                WorklaneError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| WorklaneError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .worklane/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| WorklaneError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Read a single value as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "start_date" => Ok(self.start_date.format("%Y-%m-%d").to_string()),
            "weeks" => Ok(self.weeks.to_string()),
            "day_width" => Ok(self.day_width.to_string()),
            "expanded_day_width" => Ok(self.expanded_day_width.to_string()),
            "seed" => Ok(self.seed.to_string()),
            "created" => Ok(self
                .created
                .map(|created| created.to_rfc3339())
                .unwrap_or_default()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Parse and set a single value. A rejected value leaves the config unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "start_date" => updated.start_date = parse_date(value)?,
            "weeks" => updated.weeks = parse_number(key, value)?,
            "day_width" => updated.day_width = parse_number(key, value)?,
            "expanded_day_width" => updated.expanded_day_width = parse_number(key, value)?,
            "seed" => updated.seed = parse_number(key, value)?,
            "created" => {
                return Err(WorklaneError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ))
            }
            _ => return Err(unknown_key(key)),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        check_weeks(self.weeks)?;
        for (key, width) in [
            ("day_width", self.day_width),
            ("expanded_day_width", self.expanded_day_width),
        ] {
            if !(1..=MAX_DAY_WIDTH).contains(&width) {
                return Err(WorklaneError::Config(format!(
                    "{} must be between 1 and {}",
                    key, MAX_DAY_WIDTH
                )));
            }
        }
        Ok(())
    }
}

/// Reject window lengths outside `1..=MAX_WEEKS`
pub fn check_weeks(weeks: u32) -> Result<()> {
    if !(1..=MAX_WEEKS).contains(&weeks) {
        return Err(WorklaneError::Config(format!(
            "weeks must be between 1 and {}",
            MAX_WEEKS
        )));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| WorklaneError::InvalidDate(value.to_string()))
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        WorklaneError::Config(format!("Invalid value for '{}': '{}'", key, value))
    })
}

fn unknown_key(key: &str) -> WorklaneError {
    WorklaneError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
        assert_eq!(config.total_days(), 84);
        assert_eq!(config.width_settings(), WidthSettings::default());
        assert_eq!(config.seed, 24022026);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.weeks = 4;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".worklane").exists());
        assert!(temp.path().join(".worklane/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".worklane")).unwrap();
        fs::write(temp.path().join(".worklane/config.toml"), "weeks = 2\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.weeks, 2);
        assert_eq!(loaded.day_width, 42);
        assert_eq!(loaded.created, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            WorklaneError::NotWorklaneDirectory(_) => {}
            other => panic!("Expected NotWorklaneDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_zero_weeks() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".worklane")).unwrap();
        fs::write(temp.path().join(".worklane/config.toml"), "weeks = 0\n").unwrap();
        assert!(Config::load_from_dir(temp.path()).is_err());
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();
        config.set("start_date", "2026-03-02").unwrap();
        config.set("weeks", "6").unwrap();
        assert_eq!(config.get("start_date").unwrap(), "2026-03-02");
        assert_eq!(config.get("weeks").unwrap(), "6");
    }

    #[test]
    fn test_set_invalid_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("start_date", "02-03-2026"),
            Err(WorklaneError::InvalidDate(_))
        ));
        assert!(config.set("weeks", "many").is_err());
        assert!(config.set("day_width", "0").is_err());
        assert!(config.set("created", "now").is_err());

        let err = config.set("colour", "red").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'colour'"));
    }

    #[test]
    fn test_set_rejects_oversized_window() {
        let mut config = Config::default();
        let err = config.set("weeks", "400000000").unwrap_err();
        assert!(err.to_string().contains("weeks must be between 1 and 520"));
        assert_eq!(config.weeks, 12);
        assert!(config.set("weeks", "520").is_ok());
        assert!(config.set("weeks", "521").is_err());
    }

    #[test]
    fn test_set_rejects_oversized_widths() {
        let mut config = Config::default();
        let err = config.set("day_width", "4000000000").unwrap_err();
        assert!(err.to_string().contains("day_width must be between 1 and 10000"));
        assert_eq!(config.day_width, 42);
        assert!(config.set("expanded_day_width", "10001").is_err());
        assert!(config.set("expanded_day_width", "10000").is_ok());
    }

    #[test]
    fn test_load_rejects_oversized_widths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".worklane")).unwrap();
        fs::write(
            temp.path().join(".worklane/config.toml"),
            "day_width = 4000000000\n",
        )
        .unwrap();
        assert!(Config::load_from_dir(temp.path()).is_err());
    }

    #[test]
    fn test_largest_accepted_window_fits_geometry() {
        let total = u64::from(MAX_DAY_WIDTH) * u64::from(MAX_WEEKS) * 7;
        assert!(total <= u64::from(u32::MAX));
    }

    #[test]
    fn test_check_weeks_bounds() {
        assert!(check_weeks(0).is_err());
        assert!(check_weeks(1).is_ok());
        assert!(check_weeks(MAX_WEEKS).is_ok());
        assert!(check_weeks(4_000_000_000).is_err());
    }
}
