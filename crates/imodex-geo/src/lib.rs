pub mod cache;
mod data;
pub mod error;
pub mod gazetteer;
pub mod geocode;
pub mod normalize;
pub mod resolver;

pub use cache::GeocodeCache;
pub use error::GeoError;
pub use gazetteer::{Gazetteer, GazetteerEntry};
pub use geocode::{CachedGeocoder, Geocoder, NominatimClient};
pub use normalize::normalize_name;
pub use resolver::{LocationResolver, ParseStrategy};
