use std::sync::Arc;

use homework_watcher::config::environment::Config;
use homework_watcher::services::practicum::PracticumClient;
use homework_watcher::services::telegram::TelegramClient;
use homework_watcher::services::watcher::WatcherEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_watcher=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration - a missing variable is the only fatal error.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Missing required environment variable: {e}");
            std::process::exit(1);
        }
    };

    let source = Arc::new(PracticumClient::new(
        config.practicum_token.clone(),
        config.endpoint.clone(),
    ));
    let notifier = Arc::new(TelegramClient::new(config.telegram_token.clone()));

    let engine = WatcherEngine::new(&config, source, notifier);
    engine.run().await;
}
