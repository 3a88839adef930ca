//! Configuration and settings management for Rebarkit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Issuer identity printed on quotation documents
//! - Document defaults (currency label, validity period)
//! - Calculator defaults (shape, dimensions, diameter, margin, quantity)
//!
//! Absent a config file, every section falls back to the hard-coded
//! defaults, so a fresh start always behaves the same way.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use rebarkit_core::ShapeKind;
use rebarkit_quote::IssuerIdentity;

use crate::error::{Result, SettingsError};

/// Document defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// Currency label appended to every amount.
    pub currency: String,
    /// Quotation validity period in days.
    pub validity_days: u32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            currency: "PLN".to_string(),
            validity_days: 14,
        }
    }
}

/// Calculator defaults applied when a parameter is not supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    /// Shape family selected on startup.
    pub default_shape: ShapeKind,
    /// Default dimension for width/height/arm fields, in cm.
    pub default_dimension_cm: f64,
    /// Default splice/overlap allowance for rectangles, in cm.
    pub default_overlap_cm: f64,
    /// Default bar diameter in millimeters.
    pub default_diameter_mm: u32,
    /// Default margin percentage.
    pub default_margin_percent: f64,
    /// Default piece count.
    pub default_quantity: u32,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            default_shape: ShapeKind::Rectangle,
            default_dimension_cm: 20.0,
            default_overlap_cm: 10.0,
            default_diameter_mm: 6,
            default_margin_percent: 10.0,
            default_quantity: 1,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Issuer identity block for quotation documents
    pub issuer: IssuerIdentity,
    /// Document defaults
    pub document: DocumentSettings,
    /// Calculator defaults
    pub calculator: CalculatorSettings,
}

impl Config {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| SettingsError::LoadError(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| SettingsError::LoadError(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self).map_err(|e| {
                SettingsError::SaveError(format!("Failed to serialize config: {}", e))
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self).map_err(|e| {
                SettingsError::SaveError(format!("Failed to serialize config: {}", e))
            })?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Loads the given file, or the defaults when `path` is `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let calculator = &self.calculator;
        if !(0.0..=100.0).contains(&calculator.default_margin_percent) {
            return Err(SettingsError::InvalidSetting {
                key: "calculator.default_margin_percent".to_string(),
                reason: "must be between 0 and 100".to_string(),
            });
        }
        if calculator.default_quantity < 1 {
            return Err(SettingsError::InvalidSetting {
                key: "calculator.default_quantity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if calculator.default_diameter_mm == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "calculator.default_diameter_mm".to_string(),
                reason: "must be > 0".to_string(),
            });
        }
        if calculator.default_dimension_cm < 0.0 || calculator.default_overlap_cm < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "calculator.default_dimension_cm".to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        if self.document.currency.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "document.currency".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.document.validity_days == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "document.validity_days".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Platform configuration directory for Rebarkit.
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("rebarkit"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("No config directory on this platform".to_string())
        })
}

/// Default configuration file location.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_margin_validation() {
        let mut config = Config::default();
        config.calculator.default_margin_percent = 120.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { key, .. })
                if key == "calculator.default_margin_percent"
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "issuer: {}").unwrap();
        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    }
}
