//! Address resolver: input validation, the single provider round-trip, and
//! flattening of the first candidate.

use super::provider::{self, GeocodeResponse};
use super::types::{GeocodeError, LocationRecord};

/// Resolves free-text addresses against the Google geocoding endpoint.
///
/// The server-side credential is explicit construction-time state, so tests
/// can substitute both the key and the endpoint.
pub struct Resolver {
    api_key: Option<String>,
    endpoint: String,
}

impl Resolver {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, provider::GOOGLE_GEOCODE_ENDPOINT)
    }

    /// Create a resolver pointed at a specific endpoint (for testing).
    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
        }
    }

    /// Resolve one address. Exactly one outbound call, no retries, transport
    /// default timeout.
    pub fn resolve(&self, address: &str) -> Result<LocationRecord, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }

        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GeocodeError::MissingApiKey)?;

        let response = ureq::get(&self.endpoint)
            .query("address", address)
            .query("key", key)
            .call()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let body: GeocodeResponse = response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        if body.status != provider::STATUS_OK || body.results.is_empty() {
            tracing::debug!(
                "provider returned no usable result: status={} error_message={:?}",
                body.status,
                body.error_message,
            );
            return Err(GeocodeError::NoResults(address.to_string()));
        }

        // First candidate only, no disambiguation among multiple results.
        // Known limitation of this endpoint, not a tie-break.
        Ok(provider::extract_record(&body.results[0]))
    }
}
