use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::place::{Coordinate, PlaceSummary};

pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Soft ranking hint. Results outside the radius are still returned.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LocationBias {
    #[serde(flatten)]
    pub center: Coordinate,
    pub radius_m: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Filters {
    /// The provider accepts a single included type per call.
    pub types: Option<Vec<String>>,
    pub open_now: Option<bool>,
    pub min_rating: Option<f64>,
    pub price_levels: Option<Vec<i64>>,
    pub keyword: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub location_bias: Option<LocationBias>,
    #[serde(default)]
    pub filters: Option<Filters>,
    #[serde(default = "default_search_limit")]
    pub limit: i64,
    #[serde(default)]
    pub page_token: Option<String>,
}

fn default_search_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location_bias: None,
            filters: None,
            limit: DEFAULT_SEARCH_LIMIT,
            page_token: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<PlaceSummary>,
    pub next_page_token: Option<String>,
}
