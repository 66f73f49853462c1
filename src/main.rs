//! Binary entry: tracing init, settings, collaborator wiring, serve.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use nutriscan::api::{nutriscan_router, ApiContext};
use nutriscan::config::{self, Settings};
use nutriscan::lookup::{ChatClient, OpenAiChatClient};
use nutriscan::ocr::{OcrEngine, VisionOcrClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = Settings::from_env();
    if let Ok(dump) = serde_json::to_string(&settings) {
        tracing::debug!(settings = %dump, "settings loaded");
    }

    let ocr: Option<Arc<dyn OcrEngine + Send + Sync>> = match &settings.vision_api_key {
        Some(key) => Some(Arc::new(VisionOcrClient::new(
            &settings.vision_api_url,
            key,
            config::COLLABORATOR_TIMEOUT_SECS,
        ))),
        None => {
            tracing::warn!("VISION_API_KEY not set; /api/scan-label will answer NOT_CONFIGURED");
            None
        }
    };

    let chat: Option<Arc<dyn ChatClient + Send + Sync>> = match &settings.llm_api_key {
        Some(key) => Some(Arc::new(OpenAiChatClient::new(
            &settings.llm_api_url,
            key,
            &settings.llm_model,
            config::COLLABORATOR_TIMEOUT_SECS,
        ))),
        None => {
            tracing::warn!("LLM_API_KEY not set; /api/food-lookup will answer NOT_CONFIGURED");
            None
        }
    };

    let app = nutriscan_router(ApiContext::new(ocr, chat));

    let addr: SocketAddr = match settings.bind.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(bind = %settings.bind, "Invalid NUTRISCAN_BIND: {e}");
            std::process::exit(1);
        }
    };
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, "Failed to bind: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "API server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received, stopping");
}
