//! `polybius` binary: square generation and the interactive cipher prompt

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use polybius_cli::args::Cli;
use polybius_cli::generate::generate_square;
use polybius_cli::session::Session;
use polybius_core::{SquareLoader, ToolConfig};
use std::fs::OpenOptions;
use tokio::io::{self, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    if cli.gen {
        env_logger::Builder::new()
            .filter_level(log_level_filter)
            .init();
    } else {
        // Keep the prompt clean while the interactive loop runs
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&cli.log_file)
            .with_context(|| format!("Failed to open log file {}", cli.log_file.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level_filter)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .init();
    }

    let config = cli.resolve_config().await?;
    log::debug!("Resolved configuration: {:?}", config);

    if cli.gen {
        run_generator(&config).await
    } else {
        run_interactive(&config).await
    }
}

async fn run_generator(config: &ToolConfig) -> Result<()> {
    let path = generate_square(config).await?;

    println!("------------");
    println!("🆗 Created new random polybius at path: {}", path.display());
    println!("Re-run the program with the new polybius file");
    println!("------------");
    Ok(())
}

async fn run_interactive(config: &ToolConfig) -> Result<()> {
    let square_file = config.square_file.as_ref().ok_or_else(|| {
        anyhow::anyhow!("No square file given. Pass --pb <FILE>, or --gen to create one")
    })?;

    let square = SquareLoader::from_file(square_file, config.variant).await?;
    log::info!(
        "Starting {} session over {} square from {}",
        config.cipher,
        config.variant,
        square_file.display()
    );

    let session = Session::new(&square, config.cipher.cipher());
    let mut stdout = io::stdout();
    session.run(BufReader::new(io::stdin()), &mut stdout).await?;
    Ok(())
}
