//! Settings for the cipher tool
//!
//! Every field has a default, so an empty YAML document is a valid
//! configuration. Command-line flags are layered on top by the CLI.

use crate::cipher::CipherKind;
use crate::errors::CipherError;
use crate::square::SquareVariant;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_RANDOM_ORG_ENDPOINT: &str = "https://api.random.org/json-rpc/2/invoke";
pub const DEFAULT_API_KEY_ENV: &str = "RANDOM_ORG_API_KEY";
pub const DEFAULT_OUTPUT_DIR: &str = "./generated_polybius_squares";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// JSON file holding the square used for ciphering.
    pub square_file: Option<PathBuf>,
    pub variant: SquareVariant,
    pub cipher: CipherKind,
    pub generator: GeneratorConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            square_file: None,
            variant: SquareVariant::Merged,
            cipher: CipherKind::Bifid,
            generator: GeneratorConfig::default(),
        }
    }
}

impl ToolConfig {
    pub fn validate(&self) -> Result<(), CipherError> {
        self.generator.validate()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// JSON-RPC endpoint of the random integer service.
    pub endpoint: String,
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not set.
    pub api_key_env: String,
    pub timeout_seconds: u64,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RANDOM_ORG_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), CipherError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(CipherError::ConfigError(format!(
                "Generator endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(CipherError::ConfigError(
                "Generator timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The API key, or a configuration error naming where it was looked for.
    pub fn require_api_key(&self) -> Result<&str, CipherError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(CipherError::ConfigError(format!(
                "A RANDOM.ORG API key is required to generate a square; pass --api-key or set {}",
                self.api_key_env
            ))),
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_env", &self.api_key_env)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}
