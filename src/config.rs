// In: src/config.rs

//! The single source of truth for codec configuration.
//!
//! `CodecConfig` is created once at the application boundary (from a JSON file,
//! a JSON string or plain `Default`) and handed to `IntegerCodec::new`. Every
//! field has a serde default so partial documents are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IntCodecError;
use crate::kernels::zstd::DEFAULT_LEVEL;

//==================================================================================
// I. Backend Selection
//==================================================================================

/// Which byte compressor the pre-coded stream is handed to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum BackendConfig {
    /// **Default:** LZ4 blocks with the container's chunk framing. This is the
    /// only backend whose output matches persisted scene files.
    #[default]
    Lz4,

    /// Zstandard at the given level. Smaller, slower, and not interchangeable
    /// with LZ4 output.
    Zstd {
        #[serde(default = "default_zstd_level")]
        level: i32,
    },
}

fn default_zstd_level() -> i32 {
    DEFAULT_LEVEL
}

//==================================================================================
// II. The Unified CodecConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

impl CodecConfig {
    pub fn from_json(json: &str) -> Result<Self, IntCodecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, IntCodecError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = CodecConfig::from_json("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.backend, BackendConfig::Lz4);
    }

    #[test]
    fn test_zstd_level_defaults() {
        let config = CodecConfig::from_json(r#"{"backend": {"backend": "zstd"}}"#).unwrap();
        assert_eq!(config.backend, BackendConfig::Zstd { level: DEFAULT_LEVEL });

        let config =
            CodecConfig::from_json(r#"{"backend": {"backend": "zstd", "level": 19}}"#).unwrap();
        assert_eq!(config.backend, BackendConfig::Zstd { level: 19 });
    }

    #[test]
    fn test_bad_backend_is_config_error() {
        let result = CodecConfig::from_json(r#"{"backend": {"backend": "brotli"}}"#);
        assert!(matches!(result, Err(IntCodecError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CodecConfig::from_json_file("/nonexistent/intcodec.json");
        assert!(matches!(result, Err(IntCodecError::Io(_))));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = CodecConfig {
            backend: BackendConfig::Zstd { level: 7 },
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CodecConfig::from_json(&json).unwrap(), config);
    }
}
