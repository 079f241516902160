use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::places::service::PlacesService;

pub mod health_check;
pub mod locations_controller;
pub mod places_controller;

pub async fn serve(
    places_service: Arc<PlacesService>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut application = router_endpoints(places_service)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
        );

    if let Some(origin_urls) = &config.origin_urls {
        let origins = parse_origins(origin_urls);

        application = application.layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(origins)
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        );
    }

    let address: SocketAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind_address))?;
    info!("API server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

/// Comma separated origins; blank and unparsable entries are skipped.
fn parse_origins(origin_urls: &str) -> Vec<HeaderValue> {
    origin_urls
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping invalid CORS origin {} due to: {}", origin, e);
                None
            }
        })
        .collect()
}

pub fn router_endpoints(places_service: Arc<PlacesService>) -> Router {
    health_check::router()
        .nest("/places", places_controller::router(places_service.clone()))
        .nest("/locations", locations_controller::router(places_service))
        .fallback(page_not_found_handler)
}
