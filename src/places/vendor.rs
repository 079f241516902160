//! Response shapes of the Places API, limited to the fields requested by the
//! field masks. Every field is optional so missing or null keys never fail
//! decoding; drift in the provider's shape is contained in this module.

use serde::Deserialize;

#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VendorSearchPage {
    pub places: Option<Vec<VendorPlace>>,
    pub next_page_token: Option<String>,
}

#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VendorPlace {
    pub id: Option<String>,
    pub display_name: Option<VendorLocalizedText>,
    pub formatted_address: Option<String>,
    pub location: Option<VendorLatLng>,
    pub rating: Option<f64>,
    pub price_level: Option<String>,
    pub types: Option<Vec<String>>,
    pub current_opening_hours: Option<VendorOpeningHours>,
    pub regular_opening_hours: Option<VendorOpeningHours>,
    pub national_phone_number: Option<String>,
    pub website_uri: Option<String>,
}

#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
pub struct VendorLocalizedText {
    pub text: Option<String>,
}

#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
pub struct VendorLatLng {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VendorOpeningHours {
    pub open_now: Option<bool>,
    pub weekday_descriptions: Option<Vec<String>>,
}
