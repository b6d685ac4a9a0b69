//! Command-line front end: flags, prompts and the browser hand-off.

pub mod args;
pub mod prompt;
pub mod runner;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

pub use args::Cli;
pub use runner::Runner;

use crate::modules::highlight::{domain::value_objects::GameDate, infrastructure::YoutubeClient};
use crate::modules::team::infrastructure::CatalogLoader;
use crate::shared::{
    utils::{init_logger, init_tracing},
    AppConfig,
};

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logger(log::LevelFilter::Warn);
    init_tracing(tracing::Level::WARN);

    let config = AppConfig::from_env()?;
    let catalog = CatalogLoader::from_config(&config)?;
    let client = YoutubeClient::from_config(&config)?;
    let runner = Runner::new(&catalog, Arc::new(client), &config, &cli);

    let chosen = {
        let mut input = std::io::stdin().lock();
        let mut output = std::io::stdout().lock();
        runner
            .execute(&cli, GameDate::today().date(), &mut input, &mut output)
            .await?
    };

    if let Some(highlight) = chosen {
        if cli.no_open {
            println!("{}", highlight.url);
        } else {
            println!("Opening the highlight in your browser...");
            open::that(&highlight.url)
                .with_context(|| format!("Could not open {}", highlight.url))?;
        }
    }

    Ok(())
}
