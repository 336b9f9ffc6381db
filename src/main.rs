//! Laer CLI entry point.

use anyhow::Result;
use clap::Parser;
use laer::cli::{commands, Cli, Commands};
use laer::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file may supply GEMINI_API_URL and GEMINI_API_KEY; real env vars win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config_path = Settings::resolve_config_path(cli.config.as_deref());
    let settings = Settings::load_from(Some(&config_path))?
        .with_overrides(cli.api_url.clone(), cli.api_key.clone());

    // Initialize logging; -v flags win over the configured level
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("laer={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Execute command
    match &cli.command {
        Commands::Serve { host, port } => {
            commands::run_serve(host.as_deref(), *port, settings).await?;
        }

        Commands::Process {
            video_url,
            num_questions,
            format,
        } => {
            commands::run_process(video_url, *num_questions, format, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, &config_path, settings)?;
        }
    }

    Ok(())
}
