//! Environment-sourced configuration.
//!
//! Two independent credentials: the server-side geocoding key and the
//! client-exposed key the browser uses to load the places widget. They may be
//! the same Google Cloud key restricted two ways; nothing here assumes that.

use std::env;

pub const SERVER_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const BROWSER_KEY_VAR: &str = "GOOGLE_MAPS_BROWSER_KEY";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Server-side geocoding credential. Absence is reported per request,
    /// never a startup failure.
    pub geocoding_api_key: Option<String>,
    /// Client-exposed credential for the autocomplete widget. Absence
    /// degrades the form to a plain text input.
    pub browser_api_key: Option<String>,
}

impl Config {
    /// Read configuration from a `.env` file (if present) and the process
    /// environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            geocoding_api_key: non_empty_var(SERVER_KEY_VAR),
            browser_api_key: non_empty_var(BROWSER_KEY_VAR),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
