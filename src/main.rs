use anyhow::Result;
use clap::Parser;
use stacktodo::{config::Config, logger::Logger, ui};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stacktodo")]
#[command(about = "A terminal to-do list built on a navigation stack", long_about = None)]
#[command(version)]
struct Cli {
    /// Load configuration from this file instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(target) = cli.generate_config {
        let path = match target {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter())?;
    log::info!("Starting stacktodo {}", env!("CARGO_PKG_VERSION"));

    ui::run_app(config, logger).await
}
