use crate::errors::{FieldError, PlacesError, Result};
use crate::models::location::LocationResolveRequest;
use crate::models::place::Coordinate;
use crate::models::price_level::PriceLevel;
use crate::models::search::{LocationBias, SearchRequest};

pub const SEARCH_LIMIT_RANGE: (i64, i64) = (1, 20);
pub const RESOLVE_LIMIT_RANGE: (i64, i64) = (1, 10);
pub const MAX_RATING: f64 = 5.0;

/// A search request that passed every check. Only [`validate_search`] builds one.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidSearch {
    pub(crate) query: String,
    pub(crate) location_bias: Option<LocationBias>,
    pub(crate) included_type: Option<String>,
    pub(crate) open_now: Option<bool>,
    pub(crate) min_rating: Option<f64>,
    pub(crate) price_levels: Vec<PriceLevel>,
    pub(crate) keyword: Option<String>,
    pub(crate) limit: u8,
    pub(crate) page_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidResolve {
    pub(crate) location_text: String,
    pub(crate) limit: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidPlaceId(pub(crate) String);

impl ValidSearch {
    pub fn limit(&self) -> u8 {
        self.limit
    }
}

impl ValidResolve {
    pub fn limit(&self) -> u8 {
        self.limit
    }
}

impl ValidPlaceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn validate_search(request: SearchRequest) -> Result<ValidSearch> {
    let mut violations = Vec::new();

    let query = non_blank("query", &request.query, &mut violations);
    let limit = limit_within("limit", request.limit, SEARCH_LIMIT_RANGE, &mut violations);

    if let Some(bias) = &request.location_bias {
        check_coordinate("location_bias", &bias.center, &mut violations);
        if !(bias.radius_m > 0.0) {
            violations.push(FieldError::new("location_bias.radius_m", "must be greater than 0"));
        }
    }

    let filters = request.filters.unwrap_or_default();

    let types = filters.types.unwrap_or_default();
    if types.len() > 1 {
        violations.push(FieldError::new(
            "filters.types",
            "only one type is supported; use query or filters.keyword for additional filtering",
        ));
    }

    if let Some(min_rating) = filters.min_rating {
        if !(0.0..=MAX_RATING).contains(&min_rating) {
            violations.push(FieldError::new("filters.min_rating", "must be between 0 and 5"));
        } else if (min_rating * 2.0) % 1.0 != 0.0 {
            violations.push(FieldError::new("filters.min_rating", "must be in 0.5 increments"));
        }
    }

    let mut price_levels = Vec::new();
    let mut invalid_levels = Vec::new();
    for level in filters.price_levels.unwrap_or_default() {
        match PriceLevel::from_level(level) {
            Some(price_level) => price_levels.push(price_level),
            None => invalid_levels.push(level.to_string()),
        }
    }
    if !invalid_levels.is_empty() {
        violations.push(FieldError::new(
            "filters.price_levels",
            format!("must be integers between 0 and 4, got {}", invalid_levels.join(", ")),
        ));
    }

    let keyword = match filters.keyword {
        Some(keyword) => non_blank("filters.keyword", &keyword, &mut violations),
        None => None,
    };

    return match (query, limit) {
        (Some(query), Some(limit)) if violations.is_empty() => Ok(ValidSearch {
            query,
            location_bias: request.location_bias,
            included_type: types.into_iter().next(),
            open_now: filters.open_now,
            min_rating: filters.min_rating,
            price_levels,
            keyword,
            limit,
            page_token: request.page_token,
        }),
        _ => Err(PlacesError::Validation(violations)),
    };
}

pub fn validate_resolve(request: LocationResolveRequest) -> Result<ValidResolve> {
    let mut violations = Vec::new();

    let location_text = non_blank("location_text", &request.location_text, &mut violations);
    let limit = limit_within("limit", request.limit, RESOLVE_LIMIT_RANGE, &mut violations);

    return match (location_text, limit) {
        (Some(location_text), Some(limit)) if violations.is_empty() => Ok(ValidResolve {
            location_text,
            limit,
        }),
        _ => Err(PlacesError::Validation(violations)),
    };
}

pub fn validate_place_id(place_id: &str) -> Result<ValidPlaceId> {
    let trimmed = place_id.trim();
    if trimmed.is_empty() {
        return Err(PlacesError::validation("place_id", "must not be empty"));
    }
    Ok(ValidPlaceId(trimmed.to_string()))
}

fn non_blank(field: &str, value: &str, violations: &mut Vec<FieldError>) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        violations.push(FieldError::new(field, "must not be empty"));
        return None;
    }
    Some(trimmed.to_string())
}

fn limit_within(field: &str, value: i64, (min, max): (i64, i64), violations: &mut Vec<FieldError>) -> Option<u8> {
    if value < min || value > max {
        violations.push(FieldError::new(field, format!("must be between {} and {}", min, max)));
        return None;
    }
    u8::try_from(value).ok()
}

fn check_coordinate(prefix: &str, coordinate: &Coordinate, violations: &mut Vec<FieldError>) {
    if !(-90.0..=90.0).contains(&coordinate.lat) {
        violations.push(FieldError::new(format!("{}.lat", prefix), "must be between -90 and 90"));
    }
    if !(-180.0..=180.0).contains(&coordinate.lng) {
        violations.push(FieldError::new(format!("{}.lng", prefix), "must be between -180 and 180"));
    }
}
