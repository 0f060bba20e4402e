//! Loaders for the YAML settings file and the JSON square file

use crate::config::types::ToolConfig;
use crate::errors::CipherError;
use crate::square::{Square, SquareVariant};
use std::env;
use std::path::Path;
use tokio::fs;

/// Configuration loader with environment resolution
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<ToolConfig, CipherError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            CipherError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<ToolConfig, CipherError> {
        // An empty document deserializes to unit, not to the defaults.
        let mut config: ToolConfig = if content.trim().is_empty() {
            ToolConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                CipherError::ConfigError(format!("Failed to parse YAML config: {}", e))
            })?
        };

        Self::resolve_environment(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Fill in the API key from the environment when it is not set inline
    pub fn resolve_environment(config: &mut ToolConfig) {
        let generator = &mut config.generator;
        let inline = generator
            .api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false);
        if inline {
            return;
        }

        match env::var(&generator.api_key_env) {
            Ok(value) if !value.trim().is_empty() => {
                log::debug!("Using API key from ${}", generator.api_key_env);
                generator.api_key = Some(value);
            }
            _ => {}
        }
    }
}

/// Reads a square from a JSON array of rows of one-character strings
pub struct SquareLoader;

impl SquareLoader {
    pub async fn from_file<P: AsRef<Path>>(
        path: P,
        variant: SquareVariant,
    ) -> Result<Square, CipherError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            CipherError::ConfigError(format!(
                "Unable to read square file {}: {}",
                path.display(),
                e
            ))
        })?;

        let square = Self::from_json_str(&content, variant)?;
        log::info!("Loaded {} square from {}", variant, path.display());
        Ok(square)
    }

    pub fn from_json_str(content: &str, variant: SquareVariant) -> Result<Square, CipherError> {
        let rows: Vec<Vec<String>> = serde_json::from_str(content).map_err(|e| {
            CipherError::InvalidSquare(format!("Unable to parse square file: {}", e))
        })?;
        Square::from_rows(&rows, variant)
    }
}
