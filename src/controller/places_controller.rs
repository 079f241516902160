use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use tracing::{debug, warn};
use crate::errors::PlacesError;
use crate::models::place::PlaceDetails;
use crate::models::search::{SearchRequest, SearchResponse};
use crate::places::service::PlacesService;

pub fn router(places_service: Arc<PlacesService>) -> Router {
    Router::new()
        .route("/search", post(search_places))
        .route("/:place_id", get(get_place_details))
        .route_layer(Extension(places_service))
}

pub async fn search_places(
    Extension(places_service): Extension<Arc<PlacesService>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, PlacesError> {
    let Json(request) = body.map_err(|rejection| PlacesError::validation("body", rejection.body_text()))?;

    return match places_service.search_places(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            if !matches!(e, PlacesError::Validation(_)) {
                warn!("Something went wrong searching places due to: {}", e);
            } else {
                debug!("Rejected request while searching places due to: {}", e);
            }
            Err(e)
        }
    };
}

pub async fn get_place_details(
    Extension(places_service): Extension<Arc<PlacesService>>,
    Path(place_id): Path<String>,
) -> Result<Json<PlaceDetails>, PlacesError> {
    return match places_service.get_place_details(&place_id).await {
        Ok(details) => Ok(Json(details)),
        Err(e) => {
            if !matches!(e, PlacesError::Validation(_)) {
                warn!("Something went wrong retrieving place {} due to: {}", place_id, e);
            } else {
                debug!("Rejected request while retrieving place {} due to: {}", place_id, e);
            }
            Err(e)
        }
    };
}
