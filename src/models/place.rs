use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::price_level::PriceLevel;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<Coordinate>,
    pub rating: Option<f64>,
    pub price_level: Option<PriceLevel>,
    pub types: Option<Vec<String>>,
    pub open_now: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<Coordinate>,
    pub rating: Option<f64>,
    pub price_level: Option<PriceLevel>,
    pub types: Option<Vec<String>>,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Weekly opening hours, one human readable line per day.
    pub hours: Option<Vec<String>>,
    pub open_now: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ResolvedLocation {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<Coordinate>,
    pub types: Option<Vec<String>>,
}
