mod analysis;
mod config;
mod documents;
mod errors;
mod extraction;
mod llm_client;
mod narrative;
mod pipeline;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::compare::Rounding;
use crate::analysis::lexicon::SkillLexicon;
use crate::config::Config;
use crate::documents::{ConvertServiceClient, DocxConverter, UnconfiguredDocxConverter};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobfit API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Skill lexicon — the built-in reference lists
    let lexicon = Arc::new(SkillLexicon::default_sets());
    info!(
        "Skill lexicon loaded: {} technical, {} soft",
        lexicon.technical.len(),
        lexicon.soft.len()
    );

    // DOCX converter — external service when configured
    let docx: Arc<dyn DocxConverter> = match &config.docx_convert_url {
        Some(url) => {
            info!("DOCX converter: {url}");
            Arc::new(ConvertServiceClient::new(url.clone()))
        }
        None => {
            info!("DOCX converter not configured; DOCX uploads will be rejected");
            Arc::new(UnconfiguredDocxConverter)
        }
    };

    // Build app state
    let state = AppState {
        llm,
        lexicon,
        docx,
        rounding: Rounding::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
