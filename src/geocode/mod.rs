//! Geocoding subsystem.
//!
//! Wire format and extraction rules for the Google geocoding response,
//! plus the resolver that turns a free-text address into a normalized
//! location record.

pub mod provider;
pub mod resolver;
pub mod types;

pub use resolver::Resolver;
pub use types::{GeocodeError, LocationRecord};
