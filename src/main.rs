use anyhow::Result;
use clap::{Arg, Command};
use tracing::{info, warn};

use dictation_trainer::api::{server, AppState};
use dictation_trainer::captions::{TimedTextProvider, TranscriptFetcher};
use dictation_trainer::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("dictation_trainer=info,warn")
        .init();

    let matches = Command::new("Dictation Trainer (Rust)")
        .version("0.1.0")
        .author("TigreRoll")
        .about("Transcript fetching and dictation scoring service")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port for the API server"),
        )
        .arg(
            Arg::new("provider-timeout")
                .long("provider-timeout")
                .value_name("SECONDS")
                .help("Timeout for captions provider requests"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if let Some(port) = matches.get_one::<String>("port") {
        config.server.port = port.parse()?;
    }
    if let Some(timeout) = matches.get_one::<String>("provider-timeout") {
        config.provider.timeout_seconds = timeout.parse()?;
    }
    if matches.get_flag("verbose") {
        info!("Verbose logging enabled");
    }

    info!("🚀 Dictation Trainer (Rust) starting...");
    info!("🔧 Captions provider: {}", config.provider.base_url);
    info!("🔧 Default language: {}", config.provider.default_language);

    let provider = TimedTextProvider::new(config.provider.clone());
    let fetcher = TranscriptFetcher::new(
        Box::new(provider),
        config.provider.default_language.clone(),
    );

    let port = config.server.port;
    let state = AppState::new(fetcher, config);

    server::start_http_server(state, port).await
}
