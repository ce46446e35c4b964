//! HTTP API for the crawler
//!
//! A thin layer over the crawl and scrape operations:
//! - `GET /healthz`
//! - `POST /api/scrape` with `{url}`
//! - `POST /api/crawl` with `{url, maxPages?, maxDepth?, sameDomain?}`

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{router, AppState, ScrapeRequest};

use crate::config::Config;
use crate::crawler::HttpFetcher;
use crate::LinkscoutError;
use std::sync::Arc;

/// Serves the API until Ctrl-C is received
///
/// # Example
///
/// ```no_run
/// use linkscout::config::Config;
/// use linkscout::server::serve;
///
/// # async fn example() -> Result<(), linkscout::LinkscoutError> {
/// serve(&Config::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: &Config) -> Result<(), LinkscoutError> {
    let fetcher = HttpFetcher::new(config.fetcher.clone())?;
    let state = AppState::new(Arc::new(fetcher), config.crawl);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
