//! Path management for commerce-insights
//!
//! ## Path Resolution Order
//!
//! 1. `INSIGHTS_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/commerce-insights` on Linux, `%APPDATA%` on Windows,
//!    `~/Library/Application Support` on macOS)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::InsightsError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "INSIGHTS_CONFIG_DIR";

/// Manages all paths used by commerce-insights
#[derive(Debug, Clone)]
pub struct InsightsPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl InsightsPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, InsightsError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "commerce-insights")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    InsightsError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the dashboard log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("insights.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), InsightsError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            InsightsError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InsightsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("insights.log"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = InsightsPaths::new().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("insights");
        let paths = InsightsPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}
