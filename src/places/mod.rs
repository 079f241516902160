use reqwest::Method;

pub mod normalizer;
pub mod query_builder;
pub mod service;
pub mod validator;
pub mod vendor;

pub const SEARCH_FIELD_MASK: &str = "places.id,\
places.displayName,\
places.formattedAddress,\
places.location,\
places.rating,\
places.priceLevel,\
places.types,\
places.currentOpeningHours,\
nextPageToken";

pub const DETAILS_FIELD_MASK: &str = "id,\
displayName,\
formattedAddress,\
location,\
rating,\
priceLevel,\
types,\
regularOpeningHours,\
currentOpeningHours,\
nationalPhoneNumber,\
websiteUri";

pub const RESOLVE_FIELD_MASK: &str = "places.id,\
places.displayName,\
places.formattedAddress,\
places.location,\
places.types";

/// The three provider operations. Each owns an endpoint, an HTTP method and a field mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Search,
    Details,
    Resolve,
}

impl Operation {
    pub fn method(self) -> Method {
        match self {
            Operation::Search | Operation::Resolve => Method::POST,
            Operation::Details => Method::GET,
        }
    }

    pub fn endpoint(self, base_url: &str, place_id: Option<&str>) -> String {
        match self {
            Operation::Search | Operation::Resolve => format!("{}/v1/places:searchText", base_url),
            Operation::Details => format!(
                "{}/v1/places/{}",
                base_url,
                urlencoding::encode(place_id.unwrap_or_default())
            ),
        }
    }

    /// Masks are fixed per operation and list only the fields the normalizer reads.
    pub fn field_mask(self) -> &'static str {
        match self {
            Operation::Search => SEARCH_FIELD_MASK,
            Operation::Details => DETAILS_FIELD_MASK,
            Operation::Resolve => RESOLVE_FIELD_MASK,
        }
    }
}
