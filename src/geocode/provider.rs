//! Google Maps Geocoding API wire format and component extraction.

use super::types::LocationRecord;
use serde::Deserialize;
use serde_json::Value;

pub const GOOGLE_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Success sentinel in the provider's top-level status field.
pub const STATUS_OK: &str = "OK";

/// Component types that can stand in for "city", most specific first.
const CITY_COMPONENT_TYPES: &[&str] = &["locality", "sublocality", "administrative_area_level_3"];

#[derive(Deserialize, Debug)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Deserialize, Debug)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<Location>,
}

/// Coordinates arrive as raw JSON values. The provider is expected to send
/// numbers, but anything non-numeric must become `None`, never a panic or a
/// propagated junk value.
#[derive(Deserialize, Debug)]
pub struct Location {
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lng: Value,
}

/// Long name of the first component tagged with `wanted`.
fn component_long_name<'a>(components: &'a [AddressComponent], wanted: &str) -> Option<&'a str> {
    components
        .iter()
        .find(|c| c.types.iter().any(|t| t == wanted))
        .map(|c| c.long_name.as_str())
}

/// Flatten one provider result into the normalized record.
pub fn extract_record(result: &GeocodeResult) -> LocationRecord {
    let components = &result.address_components;

    let city = CITY_COMPONENT_TYPES
        .iter()
        .copied()
        .find_map(|ty| component_long_name(components, ty))
        .map(str::to_owned);
    let country = component_long_name(components, "country").map(str::to_owned);

    let location = result.geometry.as_ref().and_then(|g| g.location.as_ref());
    let latitude = location.and_then(|l| l.lat.as_f64());
    let longitude = location.and_then(|l| l.lng.as_f64());

    LocationRecord {
        city,
        country,
        latitude,
        longitude,
        formatted_address: result.formatted_address.clone(),
    }
}
