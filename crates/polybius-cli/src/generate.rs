//! `--gen` mode: fetch a random square and write it to disk

use anyhow::{Context, Result};
use polybius_core::{persist_square, RandomOrgClient, SquareGenerator, SquareVariant, ToolConfig};
use std::path::PathBuf;

/// Generates a merged square from RANDOM.ORG and returns the file it was
/// saved to.
pub async fn generate_square(config: &ToolConfig) -> Result<PathBuf> {
    if config.variant != SquareVariant::Merged {
        anyhow::bail!("Square generation is only available for the merged I/J variant");
    }

    let client = RandomOrgClient::from_config(&config.generator)?;
    let square = SquareGenerator::new(Box::new(client))
        .generate()
        .await
        .context("Unable to generate a random polybius square")?;
    let path = persist_square(&square, &config.generator.output_dir).await?;
    log::info!("Generated square saved to {}", path.display());
    Ok(path)
}
