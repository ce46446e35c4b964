//! Route handlers for the scrape and crawl endpoints
//!
//! Handlers validate input, resolve limits, and run the operation on its own
//! task. A panic inside an operation becomes a 500 for that request only, and
//! a client that disconnects cancels the task through a drop guard.

use crate::config::CrawlDefaults;
use crate::crawler::{crawl, scrape, CrawlRequest, PageFetcher};
use crate::report::{CrawlResult, ScrapeReport};
use crate::server::error::ApiError;
use crate::url::validate_http_url;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Shared application state injected into every route handler
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub crawl_defaults: CrawlDefaults,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>, crawl_defaults: CrawlDefaults) -> Self {
        Self {
            fetcher,
            crawl_defaults,
        }
    }
}

/// Body of `POST /api/scrape`
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

/// Builds the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok\n" }))
        .route("/api/scrape", post(scrape_handler))
        .route("/api/crawl", post(crawl_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn scrape_handler(
    State(state): State<AppState>,
    Json(request): Json<ScrapeRequest>,
) -> Result<Response, ApiError> {
    let url = validate_http_url(&request.url)?;

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    let fetcher = Arc::clone(&state.fetcher);

    let report = tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            report = scrape(fetcher.as_ref(), url.as_str()) => Some(report),
        }
    })
    .await
    .map_err(|e| ApiError::Internal(format!("scrape task failed: {}", e)))?
    .ok_or_else(|| ApiError::Internal("scrape cancelled".to_string()))?;

    Ok((scrape_status(&report), Json(report)).into_response())
}

/// A fetch that produced no response at all is a server-side failure
fn scrape_status(report: &ScrapeReport) -> StatusCode {
    if report.page.error.is_some() && report.page.status.is_none() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

async fn crawl_handler(
    State(state): State<AppState>,
    Json(request): Json<CrawlRequest>,
) -> Result<Json<CrawlResult>, ApiError> {
    validate_http_url(&request.url)?;
    let options = request.options(&state.crawl_defaults);
    let start_url = request.url.trim().to_string();

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    let fetcher = Arc::clone(&state.fetcher);

    let result = tokio::spawn(async move {
        crawl(fetcher.as_ref(), &start_url, options, &cancel).await
    })
    .await
    .map_err(|e| ApiError::Internal(format!("crawl task failed: {}", e)))??;

    Ok(Json(result))
}
