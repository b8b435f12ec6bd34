//! pinpoint — address form with a server-side geocoding proxy.
//!
//! A free-text street address goes in, a normalized location record (city,
//! country, coordinates, formatted address) comes out. The heavy lifting is
//! one HTTP round-trip to the Google Maps Geocoding API; this crate owns the
//! input validation, the component-extraction rules, and the error contract
//! of the `/api/geocode` boundary.

pub mod config;
pub mod geocode;
pub mod server;
