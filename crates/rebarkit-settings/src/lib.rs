//! # Rebarkit Settings
//!
//! Handles application configuration: issuer identity, document defaults,
//! and calculator defaults, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, CalculatorSettings, Config, DocumentSettings,
};
pub use error::{Result, SettingsError};
