//! Declarative logger configuration
//!
//! Mirrors the runtime registry as plain serde data so a host application
//! can ship its logging setup as JSON and build a live [`Logger`] from it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::destination::{DestinationKind, DestinationProperty};
use crate::error::{Error, Result};
use crate::level::LogLevel;
use crate::logger::Logger;

/// Serialized destination entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// `"stdout"`, `"stderr"` or `"file"`
    pub kind: String,

    /// File path; required when kind is `"file"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Byte budget for size-bounded files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,

    /// Minimum level this destination accepts
    #[serde(default = "default_min_level")]
    pub min_level: LogLevel,

    /// Destinations start enabled unless told otherwise
    #[serde(default = "default_on")]
    pub enabled: bool,
}

/// Top-level logger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Prepend a local-time stamp to every message
    #[serde(default = "default_on")]
    pub timestamp: bool,

    /// Include the level label in every message
    #[serde(default = "default_on")]
    pub level_label: bool,

    /// Destinations, applied in order
    #[serde(default)]
    pub destinations: Vec<DestinationConfig>,
}

fn default_min_level() -> LogLevel {
    LogLevel::Debug
}

fn default_on() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            timestamp: true,
            level_label: true,
            destinations: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(format!("failed to parse JSON: {e}")))
    }

    /// Serialize this configuration to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::config(format!("failed to serialize JSON: {e}")))
    }

    /// Replay this configuration into a live logger.
    pub fn build(&self) -> Result<Logger> {
        let mut logger = Logger::new();
        logger.set_timestamp(self.timestamp);
        logger.set_level_label(self.level_label);

        for entry in &self.destinations {
            let kind = match entry.kind.as_str() {
                "stdout" => DestinationKind::Stdout,
                "stderr" => DestinationKind::Stderr,
                "file" => {
                    let path = entry.path.clone().ok_or_else(|| {
                        Error::config("file destination requires a path".to_string())
                    })?;
                    DestinationKind::File { path }
                }
                other => {
                    return Err(Error::config(format!("unknown destination kind: {other}")))
                }
            };

            let id = logger.add_destination(kind)?;
            if let Some(bytes) = entry.max_file_size {
                logger.set_property(id, DestinationProperty::MaxFileSize(bytes))?;
            }
            logger.set_min_level(id, entry.min_level)?;
            if !entry.enabled {
                logger.disable(id)?;
            }
        }

        Ok(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = LoggerConfig::from_json_str("{}").unwrap();
        assert!(config.timestamp);
        assert!(config.level_label);
        assert!(config.destinations.is_empty());
    }

    #[test]
    fn test_build_from_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let json = format!(
            r#"{{
                "timestamp": false,
                "destinations": [
                    {{ "kind": "stderr", "min_level": "warning" }},
                    {{ "kind": "file", "path": {:?}, "max_file_size": 4096, "enabled": false }}
                ]
            }}"#,
            path
        );

        let config = LoggerConfig::from_json_str(&json).unwrap();
        let logger = config.build().unwrap();

        assert!(!logger.flags().timestamp);
        assert!(logger.flags().level_label);
        assert_eq!(logger.destination_count(), 2);

        let first = logger.destination(crate::DestinationId(0)).unwrap();
        assert_eq!(first.min_level(), LogLevel::Warning);
        assert!(first.is_enabled());

        let second = logger.destination(crate::DestinationId(1)).unwrap();
        assert_eq!(second.max_size(), Some(4096));
        assert!(!second.is_enabled());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let config = LoggerConfig::from_json_str(r#"{ "destinations": [{ "kind": "udp" }] }"#);
        let err = config.unwrap().build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_file_without_path_rejected() {
        let config =
            LoggerConfig::from_json_str(r#"{ "destinations": [{ "kind": "file" }] }"#).unwrap();
        assert!(matches!(config.build(), Err(Error::Config(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = LoggerConfig {
            timestamp: false,
            level_label: true,
            destinations: vec![DestinationConfig {
                kind: "stdout".to_string(),
                path: None,
                max_file_size: None,
                min_level: LogLevel::Info,
                enabled: true,
            }],
        };

        let json = config.to_json_string().unwrap();
        let parsed = LoggerConfig::from_json_str(&json).unwrap();
        assert!(!parsed.timestamp);
        assert_eq!(parsed.destinations.len(), 1);
        assert_eq!(parsed.destinations[0].min_level, LogLevel::Info);
    }
}
