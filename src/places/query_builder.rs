use serde::Serialize;
use serde_with::skip_serializing_none;
use crate::places::Operation;
use crate::places::validator::{ValidResolve, ValidSearch};

/// Body of a `places:searchText` call.
#[skip_serializing_none]
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextBody {
    pub text_query: String,
    pub page_size: u8,
    pub page_token: Option<String>,
    pub location_bias: Option<WireLocationBias>,
    pub included_type: Option<String>,
    pub open_now: Option<bool>,
    pub min_rating: Option<f64>,
    pub price_levels: Option<Vec<&'static str>>,
}

impl SearchTextBody {
    /// Keys are plain strings and non-finite floats encode as null, so this cannot fail.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("search body always serialises")
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct WireLocationBias {
    pub circle: WireCircle,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct WireCircle {
    pub center: WireLatLng,
    pub radius: f64,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct WireLatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProviderQuery {
    pub body: Option<SearchTextBody>,
    pub field_mask: &'static str,
}

pub fn build_text_query(query: &str, keyword: Option<&str>) -> String {
    match keyword {
        Some(keyword) => format!("{} {}", query, keyword).trim().to_string(),
        None => query.to_string(),
    }
}

pub fn build_search_query(request: &ValidSearch) -> ProviderQuery {
    let location_bias = request.location_bias.as_ref().map(|bias| WireLocationBias {
        circle: WireCircle {
            center: WireLatLng {
                latitude: bias.center.lat,
                longitude: bias.center.lng,
            },
            radius: bias.radius_m,
        },
    });

    let price_levels = if request.price_levels.is_empty() {
        None
    } else {
        Some(request.price_levels.iter().map(|level| level.vendor_name()).collect())
    };

    let body = SearchTextBody {
        text_query: build_text_query(&request.query, request.keyword.as_deref()),
        page_size: request.limit,
        page_token: request.page_token.clone(),
        location_bias,
        included_type: request.included_type.clone(),
        open_now: request.open_now,
        min_rating: request.min_rating,
        price_levels,
    };

    ProviderQuery {
        body: Some(body),
        field_mask: Operation::Search.field_mask(),
    }
}

/// Resolution sends only the free text and page size.
pub fn build_resolve_query(request: &ValidResolve) -> ProviderQuery {
    let body = SearchTextBody {
        text_query: request.location_text.clone(),
        page_size: request.limit,
        page_token: None,
        location_bias: None,
        included_type: None,
        open_now: None,
        min_rating: None,
        price_levels: None,
    };

    ProviderQuery {
        body: Some(body),
        field_mask: Operation::Resolve.field_mask(),
    }
}

pub fn build_details_query() -> ProviderQuery {
    ProviderQuery {
        body: None,
        field_mask: Operation::Details.field_mask(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::models::location::LocationResolveRequest;
    use crate::models::place::Coordinate;
    use crate::models::search::{Filters, LocationBias, SearchRequest};
    use crate::places::validator::{validate_resolve, validate_search};
    use crate::places::{DETAILS_FIELD_MASK, RESOLVE_FIELD_MASK, SEARCH_FIELD_MASK};

    fn search_body(request: SearchRequest) -> serde_json::Value {
        let query = build_search_query(&validate_search(request).unwrap());
        assert_eq!(query.field_mask, SEARCH_FIELD_MASK);
        query.body.unwrap().to_json()
    }

    #[test]
    fn keyword_is_appended_to_query() {
        assert_eq!(build_text_query("coffee", Some("vegan")), "coffee vegan");
        assert_eq!(build_text_query("coffee", None), "coffee");
    }

    #[test]
    fn minimal_search_body_has_only_query_and_page_size() {
        let body = search_body(SearchRequest { limit: 5, ..SearchRequest::new("coffee") });

        assert_eq!(body, json!({ "textQuery": "coffee", "pageSize": 5 }));
    }

    #[test]
    fn padded_query_is_sent_trimmed() {
        let body = search_body(SearchRequest::new("  coffee  "));

        assert_eq!(body["textQuery"], json!("coffee"));
    }

    #[test]
    fn page_size_tracks_limit() {
        for limit in [1, 7, 20] {
            let body = search_body(SearchRequest { limit, ..SearchRequest::new("coffee") });
            assert_eq!(body["pageSize"], json!(limit));
        }
    }

    #[test]
    fn page_token_is_forwarded_verbatim() {
        let body = search_body(SearchRequest {
            page_token: Some("opaque==token".into()),
            ..SearchRequest::new("coffee")
        });

        assert_eq!(body["pageToken"], json!("opaque==token"));
    }

    #[test]
    fn filters_and_bias_map_to_vendor_fields() {
        let body = search_body(SearchRequest {
            location_bias: Some(LocationBias {
                center: Coordinate { lat: 40.7, lng: -74.0 },
                radius_m: 1500.0,
            }),
            filters: Some(Filters {
                types: Some(vec!["cafe".into()]),
                open_now: Some(true),
                min_rating: Some(4.5),
                price_levels: Some(vec![1, 2]),
                keyword: Some("vegan".into()),
            }),
            ..SearchRequest::new("coffee")
        });

        assert_eq!(body, json!({
            "textQuery": "coffee vegan",
            "pageSize": 10,
            "locationBias": {
                "circle": {
                    "center": { "latitude": 40.7, "longitude": -74.0 },
                    "radius": 1500.0
                }
            },
            "includedType": "cafe",
            "openNow": true,
            "minRating": 4.5,
            "priceLevels": ["PRICE_LEVEL_INEXPENSIVE", "PRICE_LEVEL_MODERATE"]
        }));
    }

    #[test]
    fn empty_price_level_filter_is_omitted() {
        let body = search_body(SearchRequest {
            filters: Some(Filters { price_levels: Some(vec![]), ..Filters::default() }),
            ..SearchRequest::new("coffee")
        });

        assert!(body.get("priceLevels").is_none());
    }

    #[test]
    fn resolve_body_is_minimal() {
        let query = build_resolve_query(&validate_resolve(LocationResolveRequest::new("Eiffel Tower", 3)).unwrap());

        assert_eq!(query.field_mask, RESOLVE_FIELD_MASK);
        assert_eq!(
            query.body.unwrap().to_json(),
            json!({ "textQuery": "Eiffel Tower", "pageSize": 3 })
        );
    }

    #[test]
    fn non_finite_numbers_encode_as_null() {
        let body = SearchTextBody {
            text_query: "coffee".into(),
            page_size: 1,
            page_token: None,
            location_bias: None,
            included_type: None,
            open_now: None,
            min_rating: Some(f64::NAN),
            price_levels: None,
        };

        assert_eq!(body.to_json()["minRating"], serde_json::Value::Null);
    }

    #[test]
    fn details_has_no_body() {
        let query = build_details_query();

        assert!(query.body.is_none());
        assert_eq!(query.field_mask, DETAILS_FIELD_MASK);
    }

    #[test]
    fn resolve_mask_requests_identity_fields_only() {
        for excluded in ["rating", "priceLevel", "OpeningHours", "nextPageToken"] {
            assert!(!RESOLVE_FIELD_MASK.contains(excluded));
        }
        assert!(DETAILS_FIELD_MASK.contains("regularOpeningHours"));
        assert!(DETAILS_FIELD_MASK.contains("currentOpeningHours"));
        assert!(SEARCH_FIELD_MASK.ends_with("nextPageToken"));
    }
}
