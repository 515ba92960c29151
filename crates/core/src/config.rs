use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Venue-level settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub venue_name: String,
    pub maintenance_window_minutes: u32,
    pub maintenance_cadence_days: u32,
    pub snapshots_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            venue_name: "Marquee Cinema".to_string(),
            maintenance_window_minutes: 60,
            maintenance_cadence_days: 30,
            snapshots_dir: ".".to_string(),
        }
    }
}

/// Configuration manager for Marquee settings
/// Provides a layered configuration system that separates schema, available options, and persisted
/// values Configuration is stored in config.json in the repository root by default
pub struct ConfigManager {
    config_path: PathBuf,
    settings: Settings,
}

/// Available configuration options with validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSchema {
    pub general: GeneralConfigSchema,
    pub maintenance: MaintenanceConfigSchema,
    pub snapshots: SnapshotConfigSchema,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfigSchema {
    pub venue_name: ConfigOption<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceConfigSchema {
    pub maintenance_window_minutes: ConfigOption<u32>,
    pub maintenance_cadence_days: ConfigOption<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfigSchema {
    pub snapshots_dir: ConfigOption<String>,
}

/// Configuration option with validation and available choices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigOption<T> {
    pub default: T,
    pub valid_range: Option<(T, T)>,
    pub valid_choices: Option<Vec<T>>,
    pub description: String,
    pub requires_restart: bool,
}

/// Persisted configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    pub settings: Settings,
    pub created_at: String,
    pub modified_at: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    /// If no path is provided, defaults to 'config.json' in the current working directory
    pub fn new(config_path: Option<PathBuf>) -> Self {
        let config_path = config_path.unwrap_or_else(|| PathBuf::from("config.json"));

        Self {
            config_path,
            settings: Settings::default(),
        }
    }

    /// Load settings from configuration file
    /// Returns default settings if file doesn't exist or is invalid
    pub fn load(&mut self) -> Result<Settings, ConfigError> {
        if !self.config_path.exists() {
            // Create default config file
            self.save()?;
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        let config_file: ConfigFile =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Validate version compatibility
        if config_file.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Config file version {} doesn't match application version {}. Using defaults for new settings.",
                config_file.version,
                env!("CARGO_PKG_VERSION")
            );
        }

        self.settings = config_file.settings;
        Ok(self.settings.clone())
    }

    /// Save current settings to configuration file
    pub fn save(&self) -> Result<(), ConfigError> {
        // Ensure config directory exists (if config is in a subdirectory)
        if let Some(parent) = self.config_path.parent() {
            if parent != Path::new("") && parent != Path::new(".") {
                fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
            }
        }

        let config_file = ConfigFile {
            version: env!("CARGO_PKG_VERSION").to_string(),
            settings: self.settings.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
            modified_at: chrono::Utc::now().to_rfc3339(),
        };

        let content = serde_json::to_string_pretty(&config_file)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(&self.config_path, content)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Validate, update settings, and save to file
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        Self::validate_settings(&settings).map_err(ConfigError::ValidationError)?;
        self.settings = settings;
        self.save()
    }

    /// Get current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get configuration schema with available options
    pub fn schema() -> ConfigSchema {
        ConfigSchema {
            general: GeneralConfigSchema {
                venue_name: ConfigOption {
                    default: "Marquee Cinema".to_string(),
                    valid_range: None,
                    valid_choices: None,
                    description: "Display name of the venue".to_string(),
                    requires_restart: false,
                },
            },
            maintenance: MaintenanceConfigSchema {
                maintenance_window_minutes: ConfigOption {
                    default: 60,
                    valid_range: Some((15, 240)),
                    valid_choices: None,
                    description: "How long a maintenance visit keeps a theater out of service"
                        .to_string(),
                    requires_restart: false,
                },
                maintenance_cadence_days: ConfigOption {
                    default: 30,
                    valid_range: Some((7, 90)),
                    valid_choices: None,
                    description: "Days between routine maintenance visits".to_string(),
                    requires_restart: false,
                },
            },
            snapshots: SnapshotConfigSchema {
                snapshots_dir: ConfigOption {
                    default: ".".to_string(),
                    valid_range: None,
                    valid_choices: None,
                    description: "Directory where venue snapshots are stored".to_string(),
                    requires_restart: true,
                },
            },
        }
    }

    /// Validate settings against schema
    pub fn validate_settings(settings: &Settings) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let schema = Self::schema();

        if settings.venue_name.trim().is_empty() {
            errors.push("venue_name must not be empty".to_string());
        }

        if let Some((min, max)) = schema.maintenance.maintenance_window_minutes.valid_range {
            if settings.maintenance_window_minutes < min
                || settings.maintenance_window_minutes > max
            {
                errors.push(format!(
                    "maintenance_window_minutes must be between {} and {}",
                    min, max
                ));
            }
        }

        if let Some((min, max)) = schema.maintenance.maintenance_cadence_days.valid_range {
            if settings.maintenance_cadence_days < min || settings.maintenance_cadence_days > max {
                errors.push(format!(
                    "maintenance_cadence_days must be between {} and {}",
                    min, max
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Reset settings to defaults
    pub fn reset_to_defaults(&mut self) -> Result<(), ConfigError> {
        self.settings = Settings::default();
        self.save()
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    ReadError(String),
    WriteError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(msg) => write!(f, "Failed to read config file: {}", msg),
            ConfigError::WriteError(msg) => write!(f, "Failed to write config file: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config file: {}", msg),
            ConfigError::SerializeError(msg) => write!(f, "Failed to serialize config: {}", msg),
            ConfigError::ValidationError(errors) => {
                write!(f, "Config validation errors: {}", errors.join(", "))
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_config_manager_new() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.json");

        let manager = ConfigManager::new(Some(config_path.clone()));
        assert_eq!(manager.config_path(), config_path);
        assert_eq!(manager.settings(), &Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.json");

        let mut manager = ConfigManager::new(Some(config_path.clone()));

        // Modify settings
        let mut settings = Settings::default();
        settings.venue_name = "Cine Centro".to_string();
        settings.maintenance_window_minutes = 90;

        // Save settings
        manager.update_settings(settings.clone()).unwrap();

        // Load into new manager
        let mut manager2 = ConfigManager::new(Some(config_path));
        let loaded_settings = manager2.load().unwrap();

        assert_eq!(loaded_settings.venue_name, "Cine Centro");
        assert_eq!(loaded_settings.maintenance_window_minutes, 90);
    }

    #[test]
    fn test_validation() {
        let mut settings = Settings::default();

        // Valid settings should pass
        assert!(ConfigManager::validate_settings(&settings).is_ok());

        // Invalid settings should fail
        settings.maintenance_window_minutes = 5; // Outside valid range
        assert!(ConfigManager::validate_settings(&settings).is_err());

        settings.maintenance_window_minutes = 60; // Back to valid
        settings.maintenance_cadence_days = 365; // Outside valid range
        assert!(ConfigManager::validate_settings(&settings).is_err());
    }

    #[test]
    fn test_update_rejects_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.json");
        let mut manager = ConfigManager::new(Some(config_path));

        let mut settings = Settings::default();
        settings.venue_name = "  ".to_string();

        assert!(manager.update_settings(settings).is_err());
        // Stored settings are untouched
        assert_eq!(manager.settings(), &Settings::default());
    }

    #[test]
    fn test_schema_completeness() {
        let schema = ConfigManager::schema();

        // Ensure all settings have corresponding schema entries
        assert!(!schema.general.venue_name.description.is_empty());
        assert!(schema
            .maintenance
            .maintenance_window_minutes
            .valid_range
            .is_some());
        assert!(schema.maintenance.maintenance_cadence_days.valid_range.is_some());
        assert!(schema.snapshots.snapshots_dir.requires_restart);
    }
}
