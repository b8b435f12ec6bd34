//! Core types for the geocoding subsystem.

use serde::Serialize;
use std::fmt;

/// Normalized output of a geocoding lookup.
///
/// Every field is independently optional: a successful provider response does
/// not guarantee a locality-level component or usable coordinates, so absent
/// fields serialize as `null` rather than being dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub formatted_address: Option<String>,
}

/// Geocoding failures.
///
/// `Network` and `InvalidResponse` stay distinct for diagnostics but share
/// one generic message at the HTTP boundary.
#[derive(Debug)]
pub enum GeocodeError {
    /// The address was empty after trimming.
    EmptyAddress,
    /// No server-side provider credential is configured.
    MissingApiKey,
    /// The provider answered but returned no usable result.
    NoResults(String),
    /// Transport-level failure while calling the provider.
    Network(String),
    /// The provider answered with a body we could not decode.
    InvalidResponse(String),
}

impl GeocodeError {
    /// HTTP status for the boundary layer.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyAddress => 400,
            Self::MissingApiKey => 500,
            Self::NoResults(_) => 404,
            Self::Network(_) | Self::InvalidResponse(_) => 500,
        }
    }

    /// Fixed user-facing message for the JSON error body.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::EmptyAddress => "Address field cannot be empty.",
            Self::MissingApiKey => "Google Maps API key is missing.",
            Self::NoResults(_) => "No results found for the provided address.",
            Self::Network(_) | Self::InvalidResponse(_) => "Failed to fetch geocoding data.",
        }
    }

    /// Whether this failure happened while talking to the provider.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Network(_) | Self::InvalidResponse(_))
    }
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAddress => write!(f, "Address field cannot be empty."),
            Self::MissingApiKey => write!(f, "Google Maps API key is missing."),
            Self::NoResults(q) => write!(f, "No results found for '{}'", q),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid API response: {}", msg),
        }
    }
}

impl std::error::Error for GeocodeError {}
