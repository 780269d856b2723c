// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use thiserror::Error;

use crate::core::session::DEFAULT_LENGTH_INPUT;

// Runtime configuration for the generator front ends
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: String,

    // Web Interface
    pub api_address: String,
    pub api_port: u16,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

/// A setting that was present but unusable. Loading happens before the
/// logger exists, so these are handed back for the caller to report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error("Invalid PASSFORGE_API_PORT '{0}', using the default")]
    InvalidPort(String),

    #[error("Unknown log level '{0}', using the default")]
    UnknownLogLevel(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_length: DEFAULT_LENGTH_INPUT.to_string(),

            // Web Interface
            api_address: "127.0.0.1".to_string(),
            api_port: 5000,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<ConfigWarning>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unparseable values keep the default
    /// and are reported as warnings.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigWarning>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(length) = lookup("PASSFORGE_DEFAULT_LENGTH") {
            config.default_length = length.trim().to_string();
        }

        // Web Interface
        if let Some(address) = lookup("PASSFORGE_API_ADDRESS") {
            config.api_address = address;
        }

        if let Some(val) = lookup("PASSFORGE_API_PORT") {
            match val.parse() {
                Ok(port) => config.api_port = port,
                Err(_) => warnings.push(ConfigWarning::InvalidPort(val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => warnings.push(ConfigWarning::UnknownLogLevel(level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let (config, warnings) = Config::from_lookup(|_| None);
        assert!(warnings.is_empty());
        assert_eq!(config.default_length, "4");
        assert_eq!(config.api_address, "127.0.0.1");
        assert_eq!(config.api_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let (config, warnings) = Config::from_lookup(lookup_from(&[
            ("PASSFORGE_DEFAULT_LENGTH", " 12 "),
            ("PASSFORGE_API_ADDRESS", "0.0.0.0"),
            ("PASSFORGE_API_PORT", "8080"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "logs/passforge.log"),
        ]));

        assert!(warnings.is_empty());
        assert_eq!(config.default_length, "12");
        assert_eq!(config.api_address, "0.0.0.0");
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/passforge.log")));
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let (config, warnings) = Config::from_lookup(lookup_from(&[
            ("PASSFORGE_API_PORT", "not-a-port"),
            ("LOG_LEVEL", "chatty"),
            ("LOG_FILE", "  "),
        ]));

        assert_eq!(config.api_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::InvalidPort("not-a-port".to_string()),
                ConfigWarning::UnknownLogLevel("chatty".to_string()),
            ]
        );
    }

    #[test]
    fn test_warning_text() {
        let warning = ConfigWarning::InvalidPort("70000".to_string());
        assert_eq!(warning.to_string(), "Invalid PASSFORGE_API_PORT '70000', using the default");
    }
}
