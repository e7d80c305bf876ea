//! HTTP surface: the page at `/` plus static files from the public directory.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::header::{self, HeaderName};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::html::{PageOptions, render_page};
use crate::theme::ColorMode;

/// Builds the router. Static files are served only when `public_dir` exists.
pub fn router(options: PageOptions, public_dir: Option<PathBuf>) -> Router {
    let mut router = Router::new().route("/", get(index));

    match public_dir {
        Some(dir) if dir.is_dir() => {
            tracing::debug!(dir = %dir.display(), "serving static files");
            router = router.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "public directory missing; static files disabled");
        }
        None => {}
    }

    router
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(options))
}

async fn index(
    State(options): State<Arc<PageOptions>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    let mode = ColorMode::from_query_string(query.as_deref());
    let page = render_page(mode, &options);
    let etag = compute_etag(&page);

    let cache_headers = [
        (header::ETAG, etag.clone()),
        (header::CACHE_CONTROL, "no-cache".to_string()),
    ];

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && let Ok(if_none_match) = if_none_match.to_str()
        && etag_matches(if_none_match, &etag)
    {
        return (StatusCode::NOT_MODIFIED, cache_headers).into_response();
    }

    (cache_headers, Html(page)).into_response()
}

fn compute_etag(body: &str) -> String {
    format!("\"{}\"", blake3::hash(body.as_bytes()).to_hex())
}

/// `If-None-Match` uses weak comparison over a comma-separated list, or `*`.
fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
    })
}

/// Binds `host:port` and serves until Ctrl-C.
pub async fn serve(
    host: &str,
    port: u16,
    options: PageOptions,
    public_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let app = router(options, public_dir);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("bind {host}:{port}"))?;
    let addr = listener.local_addr().context("read bound address")?;
    tracing::info!(address = %addr, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, stopping server");
}
