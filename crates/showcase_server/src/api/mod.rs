//! HTTP routes for the Showcase API.
//!
//! # Responsibility
//! - Map `/api/*` routes onto core services.
//! - Log one `http_request` event per handled request.

use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use log::info;
use std::time::Instant;

mod meta;
mod portfolios;
mod properties;

/// Builds the full application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(meta::ping))
        .route("/templates", get(meta::list_templates))
        .route(
            "/properties",
            get(properties::list_properties).post(properties::create_property),
        )
        .route("/properties/{id}", get(properties::get_property))
        .route(
            "/portfolios",
            get(portfolios::list_portfolios).post(portfolios::create_portfolio),
        )
        .route("/portfolios/{id}", get(portfolios::get_portfolio))
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    info!(
        "event=http_request module=api status={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        started_at.elapsed().as_millis()
    );
    response
}
