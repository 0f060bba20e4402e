//! Configuration module for the cipher tool
//!
//! Covers the optional YAML settings file and the JSON square file that
//! every ciphering session starts from.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;


use crate::errors::CipherError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<ToolConfig, CipherError> {
    ConfigLoader::from_file(path).await
}
