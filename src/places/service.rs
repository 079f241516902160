use serde::de::DeserializeOwned;
use tracing::error;
use crate::errors::{PlacesError, Result};
use crate::models::location::{LocationResolveRequest, LocationResolveResponse};
use crate::models::place::PlaceDetails;
use crate::models::search::{SearchRequest, SearchResponse};
use crate::places::normalizer::{decode_payload, normalize_details, normalize_resolve, normalize_search};
use crate::places::query_builder::{build_details_query, build_resolve_query, build_search_query, ProviderQuery, SearchTextBody};
use crate::places::validator::{validate_place_id, validate_resolve, validate_search};
use crate::places::vendor::{VendorPlace, VendorSearchPage};
use crate::places::Operation;
use crate::repositories::google_places_repo::GooglePlacesRepo;

const BODY_SNIPPET_LIMIT: usize = 512;

/// Runs validate, build, call, classify and normalize for each operation.
pub struct PlacesService {
    google_places_repo: GooglePlacesRepo,
}

impl PlacesService {
    pub fn new(google_places_repo: GooglePlacesRepo) -> Self {
        Self { google_places_repo }
    }

    pub async fn search_places(&self, request: SearchRequest) -> Result<SearchResponse> {
        let request = validate_search(request)?;
        let query = build_search_query(&request);

        let page: VendorSearchPage = self.call(Operation::Search, None, query).await?;
        Ok(normalize_search(page, request.limit()))
    }

    pub async fn get_place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let place_id = validate_place_id(place_id)?;
        let query = build_details_query();

        let place: VendorPlace = self.call(Operation::Details, Some(place_id.as_str()), query).await?;
        Ok(normalize_details(place, place_id.as_str()))
    }

    pub async fn resolve_locations(&self, request: LocationResolveRequest) -> Result<LocationResolveResponse> {
        let request = validate_resolve(request)?;
        let query = build_resolve_query(&request);

        let page: VendorSearchPage = self.call(Operation::Resolve, None, query).await?;
        Ok(normalize_resolve(page, request.limit()))
    }

    async fn call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        place_id: Option<&str>,
        query: ProviderQuery,
    ) -> Result<T> {
        let url = operation.endpoint(self.google_places_repo.base_url(), place_id);
        let response = self
            .google_places_repo
            .request(operation.method(), &url, query.body.as_ref().map(SearchTextBody::to_json), query.field_mask)
            .await?;

        if response.status >= 400 {
            error!(
                "Places provider error {} for {:?}. response={}",
                response.status,
                operation,
                snippet(&response.body)
            );
            return Err(PlacesError::UpstreamHttp {
                status: response.status,
                body: response.body,
            });
        }

        decode_payload(&response.body).map_err(|e| {
            error!(
                "Places provider returned an unreadable payload for {:?}: {}. response={}",
                operation,
                e,
                snippet(&response.body)
            );
            e
        })
    }
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(BODY_SNIPPET_LIMIT) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}
