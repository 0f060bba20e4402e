//! Command-line flags and their merge with the settings file

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use polybius_core::{CipherKind, ConfigLoader, SquareVariant, ToolConfig};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// I and J share one cell
    Merged,
    /// I and J are separate symbols
    Strict,
}

impl From<VariantArg> for SquareVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Merged => SquareVariant::Merged,
            VariantArg::Strict => SquareVariant::Strict,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CipherArg {
    /// Fractionating Bifid cipher
    Bifid,
    /// Row/column digit substitution
    Polybius,
}

impl From<CipherArg> for CipherKind {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Bifid => CipherKind::Bifid,
            CipherArg::Polybius => CipherKind::Polybius,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "polybius",
    author,
    version,
    about = "Encrypt and decrypt with a Polybius square or the Bifid cipher"
)]
pub struct Cli {
    #[clap(
        short = 'p',
        long = "pb",
        visible_alias = "square",
        help = "Specify the file of your 5x5 polybius square"
    )]
    pub pb: Option<PathBuf>,

    #[clap(
        long,
        help = "Generate a new random polybius square using RANDOM.ORG atmospheric noise, then exit"
    )]
    pub gen: bool,

    #[clap(long, help = "Your API key for the RANDOM.ORG service")]
    pub api_key: Option<String>,

    #[clap(long, value_enum, help = "How the square treats I and J [default: merged]")]
    pub variant: Option<VariantArg>,

    #[clap(long, value_enum, help = "Cipher applied to each line [default: bifid]")]
    pub cipher: Option<CipherArg>,

    #[clap(long, help = "Directory for generated squares [default: ./generated_polybius_squares]")]
    pub output_dir: Option<PathBuf>,

    #[clap(long, short, help = "Optional YAML settings file")]
    pub config: Option<PathBuf>,

    #[clap(long, short, default_value = "info")]
    pub log_level: String,

    #[clap(
        long,
        default_value = "polybius.log",
        help = "Log file used while the interactive prompt is running"
    )]
    pub log_file: PathBuf,
}

impl Cli {
    /// Settings file (if any) with flags layered on top and the API key
    /// resolved from the environment.
    pub async fn resolve_config(&self) -> Result<ToolConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::from_file(path)
                .await
                .with_context(|| format!("Unable to load settings from {}", path.display()))?,
            None => ToolConfig::default(),
        };

        if let Some(pb) = &self.pb {
            config.square_file = Some(pb.clone());
        }
        if let Some(variant) = self.variant {
            config.variant = variant.into();
        }
        if let Some(cipher) = self.cipher {
            config.cipher = cipher.into();
        }
        if let Some(dir) = &self.output_dir {
            config.generator.output_dir = dir.clone();
        }
        if let Some(key) = &self.api_key {
            config.generator.api_key = Some(key.clone());
        }

        ConfigLoader::resolve_environment(&mut config);
        config.validate()?;
        Ok(config)
    }
}
