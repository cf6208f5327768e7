//! Shared domain types for the normalization engine.
//!
//! A scraped listing enters as a [`ParsedListing`]; the location side produces
//! a [`ResolvedLocation`] and the text-mining side a [`NormalizedProperty`].
//! The assembly layer merges both into the final canonical record.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
///
/// `ResolvedLocation` carries coordinates as `Option<Coordinates>` so that
/// latitude and longitude are always both present or both absent; a record
/// can never end up with one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Administrative-hierarchy resolution of a listing's location text.
///
/// Every field is best-effort: an unrecognized location yields the parsed
/// strings (or nothing) with no coordinates, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub district: Option<String>,
    pub municipality: Option<String>,
    pub parish: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl ResolvedLocation {
    /// True when no field at all was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.district.is_none()
            && self.municipality.is_none()
            && self.parish.is_none()
            && self.coordinates.is_none()
    }
}

/// Structured attributes mined from a listing's feature bag and description.
///
/// Each field is independently optional; a parse miss is `None`, not an
/// error. Values are kept as the strings the downstream record expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProperty {
    /// Canonical property type (e.g. `"apartamento"`, `"moradia"`).
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    /// Room-count code (e.g. `"T3"`, `"T3+1"`).
    pub tipology: Option<String>,
    pub area_total: Option<String>,
    pub area_useful: Option<String>,
    /// Construction year within [1850, current year].
    pub year: Option<String>,
    /// Floor label: `"R/C"`, `"Cave"`, or a cleaned-up pass-through.
    pub floor: Option<String>,
    pub condition: Option<String>,
    pub bathrooms: Option<String>,
}

/// Location text as delivered by a scraper: either one raw string or a list
/// of already-split address parts, depending on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationInput {
    Raw(String),
    Parts(Vec<String>),
}

/// A scraper-produced listing, upstream of normalization.
///
/// `features` stays a raw [`serde_json::Value`] on purpose: scrapers disagree
/// on its shape (flat object, object nested under `"_raw"`, list of loose
/// fragments) and a wrong-typed bag must degrade to an empty haystack rather
/// than fail deserialization of the whole listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedListing {
    #[serde(default)]
    pub location: Option<LocationInput>,
    #[serde(default)]
    pub features: serde_json::Value,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
