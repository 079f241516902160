use serde::de::DeserializeOwned;
use tracing::debug;
use crate::errors::{PlacesError, Result};
use crate::models::location::LocationResolveResponse;
use crate::models::place::{Coordinate, PlaceDetails, PlaceSummary, ResolvedLocation};
use crate::models::price_level::PriceLevel;
use crate::models::search::SearchResponse;
use crate::places::vendor::{VendorLatLng, VendorLocalizedText, VendorOpeningHours, VendorPlace, VendorSearchPage};

/// Parse a raw provider body. Invalid JSON and shape mismatches are protocol errors.
pub fn decode_payload<T: DeserializeOwned>(raw_body: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(raw_body)
        .map_err(|e| PlacesError::UpstreamProtocol(format!("invalid JSON: {}", e)))?;

    serde_json::from_value(value)
        .map_err(|e| PlacesError::UpstreamProtocol(format!("unexpected payload shape: {}", e)))
}

pub fn normalize_search(page: VendorSearchPage, limit: u8) -> SearchResponse {
    let results = identified_places(page.places, limit)
        .map(|(place_id, place)| PlaceSummary {
            place_id,
            name: display_name(place.display_name),
            address: place.formatted_address,
            location: coordinate(place.location),
            rating: place.rating,
            price_level: price_level(place.price_level.as_deref()),
            types: place.types,
            open_now: open_now(place.current_opening_hours.as_ref()),
        })
        .collect();

    SearchResponse {
        results,
        next_page_token: page.next_page_token,
    }
}

/// The requested id stands in when the provider omits one.
pub fn normalize_details(place: VendorPlace, requested_id: &str) -> PlaceDetails {
    let place_id = place
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| requested_id.to_string());

    PlaceDetails {
        place_id,
        name: display_name(place.display_name),
        address: place.formatted_address,
        location: coordinate(place.location),
        rating: place.rating,
        price_level: price_level(place.price_level.as_deref()),
        types: place.types,
        phone: place.national_phone_number,
        website: place.website_uri,
        hours: place.regular_opening_hours.and_then(|hours| hours.weekday_descriptions),
        open_now: open_now(place.current_opening_hours.as_ref()),
    }
}

pub fn normalize_resolve(page: VendorSearchPage, limit: u8) -> LocationResolveResponse {
    let results = identified_places(page.places, limit)
        .map(|(place_id, place)| ResolvedLocation {
            place_id,
            name: display_name(place.display_name),
            address: place.formatted_address,
            location: coordinate(place.location),
            types: place.types,
        })
        .collect();

    LocationResolveResponse { results }
}

/// Places without an identifier are dropped; the rest are capped at `limit`.
fn identified_places(places: Option<Vec<VendorPlace>>, limit: u8) -> impl Iterator<Item = (String, VendorPlace)> {
    places
        .unwrap_or_default()
        .into_iter()
        .filter_map(|mut place| match place.id.take().filter(|id| !id.is_empty()) {
            Some(id) => Some((id, place)),
            None => {
                debug!("Skipping provider place without an id");
                None
            }
        })
        .take(limit as usize)
}

fn coordinate(location: Option<VendorLatLng>) -> Option<Coordinate> {
    let location = location?;
    Some(Coordinate {
        lat: location.latitude?,
        lng: location.longitude?,
    })
}

fn display_name(name: Option<VendorLocalizedText>) -> Option<String> {
    name?.text
}

fn open_now(hours: Option<&VendorOpeningHours>) -> Option<bool> {
    hours?.open_now
}

fn price_level(name: Option<&str>) -> Option<PriceLevel> {
    PriceLevel::from_vendor_name(name?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(value: serde_json::Value) -> VendorSearchPage {
        decode_payload(&value.to_string()).unwrap()
    }

    #[test]
    fn search_page_maps_every_field() {
        let response = normalize_search(page(json!({
            "places": [{
                "id": "p1",
                "displayName": { "text": "Blue Bottle", "languageCode": "en" },
                "formattedAddress": "1 Main St",
                "location": { "latitude": 37.77, "longitude": -122.41 },
                "rating": 4.6,
                "priceLevel": "PRICE_LEVEL_MODERATE",
                "types": ["cafe", "food"],
                "currentOpeningHours": { "openNow": true }
            }],
            "nextPageToken": "next"
        })), 10);

        assert_eq!(response.next_page_token.as_deref(), Some("next"));
        assert_eq!(response.results, vec![PlaceSummary {
            place_id: "p1".into(),
            name: Some("Blue Bottle".into()),
            address: Some("1 Main St".into()),
            location: Some(Coordinate { lat: 37.77, lng: -122.41 }),
            rating: Some(4.6),
            price_level: Some(PriceLevel::Moderate),
            types: Some(vec!["cafe".into(), "food".into()]),
            open_now: Some(true),
        }]);
    }

    #[test]
    fn missing_and_null_fields_become_absent() {
        let response = normalize_search(page(json!({
            "places": [{
                "id": "p1",
                "displayName": null,
                "rating": null,
                "currentOpeningHours": {}
            }]
        })), 10);

        let place = &response.results[0];
        assert_eq!(place.name, None);
        assert_eq!(place.rating, None);
        assert_eq!(place.open_now, None);
        assert_eq!(place.location, None);
        assert_eq!(response.next_page_token, None);
    }

    #[test]
    fn partial_coordinate_is_dropped_entirely() {
        let response = normalize_search(page(json!({
            "places": [
                { "id": "lat-only", "location": { "latitude": 1.0 } },
                { "id": "lng-only", "location": { "longitude": 2.0 } }
            ]
        })), 10);

        assert!(response.results.iter().all(|place| place.location.is_none()));
    }

    #[test]
    fn unknown_price_level_name_is_absent() {
        let response = normalize_search(page(json!({
            "places": [
                { "id": "a", "priceLevel": "PRICE_LEVEL_UNSPECIFIED" },
                { "id": "b", "priceLevel": "SOMETHING_NEW" },
                { "id": "c", "priceLevel": "PRICE_LEVEL_FREE" }
            ]
        })), 10);

        let levels: Vec<_> = response.results.iter().map(|place| place.price_level).collect();
        assert_eq!(levels, vec![None, None, Some(PriceLevel::Free)]);
    }

    #[test]
    fn empty_or_null_places_yield_no_results() {
        assert!(normalize_search(page(json!({})), 10).results.is_empty());
        assert!(normalize_search(page(json!({ "places": null })), 10).results.is_empty());
    }

    #[test]
    fn places_without_id_are_skipped_and_results_capped() {
        let response = normalize_resolve(page(json!({
            "places": [
                { "displayName": { "text": "no id" } },
                { "id": "" },
                { "id": "a" },
                { "id": "b" },
                { "id": "c" }
            ]
        })), 2);

        let ids: Vec<_> = response.results.iter().map(|location| location.place_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn details_reads_hours_phone_and_website() {
        let place: VendorPlace = decode_payload(&json!({
            "displayName": { "text": "Louvre" },
            "nationalPhoneNumber": "01 40 20 50 50",
            "websiteUri": "https://www.louvre.fr",
            "regularOpeningHours": {
                "openNow": false,
                "weekdayDescriptions": ["Monday: 9:00 AM – 6:00 PM", "Tuesday: Closed"]
            },
            "currentOpeningHours": { "openNow": true }
        }).to_string()).unwrap();

        let details = normalize_details(place, "abc123");

        assert_eq!(details.place_id, "abc123");
        assert_eq!(details.name.as_deref(), Some("Louvre"));
        assert_eq!(details.phone.as_deref(), Some("01 40 20 50 50"));
        assert_eq!(details.website.as_deref(), Some("https://www.louvre.fr"));
        assert_eq!(details.hours.unwrap().len(), 2);
        assert_eq!(details.open_now, Some(true));
    }

    #[test]
    fn invalid_json_and_wrong_shapes_are_protocol_errors() {
        let not_json = decode_payload::<VendorSearchPage>("<html>oops</html>");
        let wrong_shape = decode_payload::<VendorSearchPage>(r#"{"places": [{"rating": "five"}]}"#);

        assert!(matches!(not_json, Err(PlacesError::UpstreamProtocol(_))));
        assert!(matches!(wrong_shape, Err(PlacesError::UpstreamProtocol(_))));
    }
}
