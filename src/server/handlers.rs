use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::geocode::{GeocodeError, LocationRecord};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
}

#[derive(Debug)]
pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody { error: self.1 };
        (self.0, Json(body)).into_response()
    }
}

fn geocode_error(e: &GeocodeError) -> ApiError {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ApiError(status, e.public_message().to_string())
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/geocode ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeocodeQuery {
    pub address: Option<String>,
}

pub async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<LocationRecord>, ApiError> {
    let start = Instant::now();
    let address = params.address.as_deref().unwrap_or("");

    let record = state.resolver.resolve(address).map_err(|e| {
        if e.is_upstream() {
            tracing::error!("geocoding failed for {:?}: {}", address, e);
        }
        geocode_error(&e)
    })?;

    tracing::info!(
        "GET /api/geocode address={:?} -> city={:?} ({:.1}ms)",
        address,
        record.city,
        start.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(Json(record))
}

// ─── GET /api/config ─────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub browser_key: Option<String>,
}

/// Hands the client-exposed key to the presentation shell. A missing key is
/// `null`, and the shell keeps working as a plain form.
pub async fn client_config(State(state): State<Arc<AppState>>) -> Json<ClientConfig> {
    Json(ClientConfig {
        browser_key: state.config.browser_api_key.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::geocode::Resolver;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// One-shot canned-response provider on a loopback port.
    fn stub_provider(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let mut head = Vec::new();
                loop {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            head.extend_from_slice(&buf[..n]);
                            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body,
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/geocode/json", addr)
    }

    fn dead_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/geocode/json", addr)
    }

    fn test_state(key: Option<&str>, endpoint: String) -> Arc<AppState> {
        Arc::new(AppState {
            resolver: Resolver::with_endpoint(key.map(str::to_string), endpoint),
            config: Config {
                geocoding_api_key: key.map(str::to_string),
                browser_api_key: None,
            },
        })
    }

    fn query(address: Option<&str>) -> Query<GeocodeQuery> {
        Query(GeocodeQuery {
            address: address.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_missing_address_is_400() {
        let state = test_state(Some("test-key"), dead_endpoint());
        let err = geocode(State(state), query(None)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1, "Address field cannot be empty.");
    }

    #[tokio::test]
    async fn test_whitespace_address_is_400() {
        let state = test_state(Some("test-key"), dead_endpoint());
        let err = geocode(State(state), query(Some("   "))).await.unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1, "Address field cannot be empty.");
    }

    #[tokio::test]
    async fn test_missing_key_is_500() {
        let state = test_state(None, dead_endpoint());
        let err = geocode(State(state), query(Some("Tokyo"))).await.unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.1, "Google Maps API key is missing.");
    }

    #[tokio::test]
    async fn test_zero_results_is_404() {
        let endpoint = stub_provider(r#"{"status": "ZERO_RESULTS", "results": []}"#);
        let state = test_state(Some("test-key"), endpoint);
        let err = geocode(State(state), query(Some("nowhere"))).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        assert_eq!(err.1, "No results found for the provided address.");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500() {
        let state = test_state(Some("test-key"), dead_endpoint());
        let err = geocode(State(state), query(Some("Tokyo"))).await.unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.1, "Failed to fetch geocoding data.");
    }

    #[tokio::test]
    async fn test_geocode_success_shape() {
        let endpoint = stub_provider(
            r#"{
                "status": "OK",
                "results": [{
                    "address_components": [
                        {"long_name": "Mountain View", "types": ["locality", "political"]},
                        {"long_name": "United States", "types": ["country", "political"]}
                    ],
                    "formatted_address": "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA",
                    "geometry": {"location": {"lat": 37.422, "lng": -122.084}}
                }]
            }"#,
        );
        let state = test_state(Some("test-key"), endpoint);

        let Json(record) = geocode(
            State(state),
            query(Some("1600 Amphitheatre Parkway, Mountain View, CA")),
        )
        .await
        .unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["city"], "Mountain View");
        assert_eq!(json["country"], "United States");
        assert_eq!(json["latitude"], 37.422);
        assert_eq!(json["longitude"], -122.084);
        assert_eq!(
            json["formattedAddress"],
            "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA",
        );
    }

    #[tokio::test]
    async fn test_partial_record_keeps_nulls() {
        // No locality-level component and junk coordinates: still a 200,
        // with nulls for everything the provider could not supply.
        let endpoint = stub_provider(
            r#"{
                "status": "OK",
                "results": [{
                    "address_components": [
                        {"long_name": "United States", "types": ["country", "political"]}
                    ],
                    "geometry": {"location": {"lat": "junk", "lng": "junk"}}
                }]
            }"#,
        );
        let state = test_state(Some("test-key"), endpoint);

        let Json(record) = geocode(State(state), query(Some("USA"))).await.unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["city"], serde_json::Value::Null);
        assert_eq!(json["latitude"], serde_json::Value::Null);
        assert_eq!(json["longitude"], serde_json::Value::Null);
        assert_eq!(json["formattedAddress"], serde_json::Value::Null);
        assert_eq!(json["country"], "United States");
    }

    #[tokio::test]
    async fn test_client_config_without_key_is_null() {
        let state = test_state(Some("server-key"), dead_endpoint());
        let Json(cfg) = client_config(State(state)).await;
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["browserKey"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_client_config_exposes_browser_key_only() {
        let state = Arc::new(AppState {
            resolver: Resolver::with_endpoint(Some("server-key".into()), dead_endpoint()),
            config: Config {
                geocoding_api_key: Some("server-key".into()),
                browser_api_key: Some("browser-key".into()),
            },
        });
        let Json(cfg) = client_config(State(state)).await;
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["browserKey"], "browser-key");
        assert!(json.get("geocodingApiKey").is_none());
    }
}
