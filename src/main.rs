use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use mealdash::api::{CatalogClient, CollectionClient};
use mealdash::app;
use mealdash::ui::theme::ThemeMode;
use mealdash::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "mealdash", version, about = "TUI recipe search and collection manager")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme (dark or light)
    #[arg(short, long)]
    theme: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("mealdash starting");

    let theme_mode = ThemeMode::from_name(cli.theme.as_deref().unwrap_or(&config.ui.theme));

    let catalog = match CatalogClient::new(&config.catalog.base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create catalog client: {e}");
            std::process::exit(1);
        }
    };
    let collection = match CollectionClient::new(&config.backend.base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create backend client: {e}");
            std::process::exit(1);
        }
    };

    // Run the TUI event loop
    app::event_loop::run(
        catalog,
        collection,
        theme_mode,
        config.ui.placeholder_image.clone(),
    )
    .await
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "mealdash.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("mealdash=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
