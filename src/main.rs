//! Juris Graph Server - Binary Entry Point
//!
//! Serves the explorer REST API over a synthetic or HTTP document source.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use juris_graph::api::{create_router, AppState};
use juris_graph::config::ServerConfig;
use juris_graph::{
    DocumentSource, HttpDocumentSource, SearchOrchestrator, SearchSession, SynonymDictionary,
    SyntheticGenerator,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,juris_graph=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env()?;

    let dictionary = match &config.synonyms_file {
        Some(path) => {
            let dictionary = SynonymDictionary::from_json_file(path)?;
            info!(path = %path, terms = dictionary.len(), "Loaded synonym dictionary");
            dictionary
        }
        None => SynonymDictionary::legal_default(),
    };

    let source: Arc<dyn DocumentSource> = match &config.backend_url {
        Some(url) => {
            info!(endpoint = %url, "Using HTTP document source");
            Arc::new(HttpDocumentSource::new(url.clone())?)
        }
        None => {
            let generator = match config.seed {
                Some(seed) => SyntheticGenerator::seeded(seed),
                None => SyntheticGenerator::from_os_rng(),
            };
            info!(seed = ?config.seed, batch_size = config.batch_size, "Using synthetic document source");
            Arc::new(generator.with_batch_size(config.batch_size))
        }
    };

    let orchestrator = SearchOrchestrator::builder(source)
        .dictionary(dictionary)
        .latency(config.latency)
        .timeout(config.timeout)
        .max_query_chars(config.max_query_chars)
        .build();

    let session = Arc::new(SearchSession::new(Arc::new(orchestrator)));
    let app = create_router(Arc::new(AppState::new(session)));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, version = juris_graph::VERSION, "Juris Graph server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
