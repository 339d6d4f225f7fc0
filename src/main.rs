use anyhow::Result;
use clap::Parser;

use etg::cli::{self, Cli};
use etg::logger::Logger;
use etg::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.load_config()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(log::LevelFilter::Info)?;

    let result = match args.command {
        Some(command) => cli::run_command(command, &config).await,
        // Run the TUI application
        None => ui::run_app(&config).await,
    };

    logger.flush();
    result
}
