use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Extension, Json, Router};
use tracing::{debug, warn};
use crate::errors::PlacesError;
use crate::models::location::{LocationResolveRequest, LocationResolveResponse};
use crate::places::service::PlacesService;

pub fn router(places_service: Arc<PlacesService>) -> Router {
    Router::new()
        .route("/resolve", post(resolve_locations))
        .route_layer(Extension(places_service))
}

pub async fn resolve_locations(
    Extension(places_service): Extension<Arc<PlacesService>>,
    body: Result<Json<LocationResolveRequest>, JsonRejection>,
) -> Result<Json<LocationResolveResponse>, PlacesError> {
    let Json(request) = body.map_err(|rejection| PlacesError::validation("body", rejection.body_text()))?;

    return match places_service.resolve_locations(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            if !matches!(e, PlacesError::Validation(_)) {
                warn!("Something went wrong resolving locations due to: {}", e);
            } else {
                debug!("Rejected request while resolving locations due to: {}", e);
            }
            Err(e)
        }
    };
}
