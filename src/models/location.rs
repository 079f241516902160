use serde::{Deserialize, Serialize};
use crate::models::place::ResolvedLocation;

pub const DEFAULT_RESOLVE_LIMIT: i64 = 5;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LocationResolveRequest {
    pub location_text: String,
    #[serde(default = "default_resolve_limit")]
    pub limit: i64,
}

fn default_resolve_limit() -> i64 {
    DEFAULT_RESOLVE_LIMIT
}

impl LocationResolveRequest {
    pub fn new(location_text: impl Into<String>, limit: i64) -> Self {
        Self {
            location_text: location_text.into(),
            limit,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LocationResolveResponse {
    pub results: Vec<ResolvedLocation>,
}
