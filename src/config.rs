//! Configuration for course registration
//!
//! Sources, highest precedence first:
//! 1. CLI arguments
//! 2. Environment variables (COURSE_REG_* prefix)
//! 3. Configuration file (TOML)
//! 4. Default values

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::store::DEFAULT_ROSTER_FILE;

/// Config file name searched for in the working directory
const LOCAL_CONFIG_FILE: &str = "course-registration.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Roster storage
    pub storage: StorageSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Roster storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Roster file path
    pub file: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log file path (unset = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Maximum log file size in MB before rotation
    pub max_file_size_mb: u64,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Enable JSON formatted logging
    pub json_format: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            file: DEFAULT_ROSTER_FILE.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            max_file_size_mb: 10,
            max_files: 3,
            json_format: false,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = match Self::find_config_file(config_path)? {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
                })?;
                let parsed = Self::from_toml(&content)?;
                info!(path = %path.display(), "Configuration loaded from file");
                parsed
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.expand_paths();
        config.validate()?;

        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            message: e.message().to_string(),
            source: Some(e),
        })
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit_path {
            let path = PathBuf::from(expand_path(path));
            return if path.exists() {
                Ok(Some(path))
            } else {
                Err(Error::config_not_found(path))
            };
        }

        let mut search_paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            search_paths.push(dir.join("course-registration").join("config.toml"));
        }

        for path in search_paths {
            if path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `COURSE_REG_*` overrides read through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("COURSE_REG_FILE") {
            self.storage.file = val;
        }
        if let Some(val) = lookup("COURSE_REG_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Some(val) = lookup("COURSE_REG_LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Some(val) = lookup("COURSE_REG_LOG_JSON") {
            self.logging.json_format = val.to_lowercase() == "true" || val == "1";
        }
    }

    /// Point the roster at a different file (from `--file`)
    pub fn override_roster_file(&mut self, file: Option<&str>) {
        if let Some(file) = file {
            self.storage.file = expand_path(file);
        }
    }

    /// Expand ~ and environment variables in paths
    fn expand_paths(&mut self) {
        self.storage.file = expand_path(&self.storage.file);
        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.storage.file.trim().is_empty() {
            return Err(Error::config_field_invalid(
                "storage.file",
                "Roster file path cannot be empty",
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_field_invalid(
                "logging.level",
                format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// Roster file as a path
    pub fn roster_path(&self) -> &Path {
        Path::new(&self.storage.file)
    }
}

fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or(std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Write a commented default configuration file
pub fn init_config(path: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));

    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

const DEFAULT_CONFIG: &str = r#"# Course Registration Configuration

[storage]
# Roster file (JSON list of FirstName/LastName/CourseName entries)
file = "Enrollments.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log file path (uncomment to enable file logging)
# file = "~/.local/state/course-registration/registration.log"

# Maximum log file size in MB before rotation
max_file_size_mb = 10

# Number of rotated log files to keep
max_files = 3

# Enable JSON formatted logging
json_format = false
"#;
