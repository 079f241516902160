use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;
use crate::places::service::PlacesService;
use crate::repositories::google_places_repo::{ApiKeySource, GooglePlacesRepo, ReqwestTransport, RetryPolicy};

pub mod config;
pub mod controller;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod places;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting local places gateway in {} mode", config.environment);

    let transport = ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))?;
    let google_places_repo = GooglePlacesRepo::new(
        Arc::new(transport),
        config.google_places_base_url.clone(),
        ApiKeySource::Environment(config.api_key_env.clone()),
    ).with_retry_policy(RetryPolicy {
        max_retries: config.max_retries,
        backoff: Duration::from_millis(config.retry_backoff_ms),
    });

    let places_service = Arc::new(PlacesService::new(google_places_repo));

    controller::serve(places_service, &config).await
}
