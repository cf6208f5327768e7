//! Text mining of listing features: one ordered rule battery per field,
//! evaluated over a single lowercased haystack built from the raw feature
//! bag and the description prose.

mod areas;
mod bathrooms;
mod condition;
mod extractor;
mod floor;
mod haystack;
mod property_type;
mod tipology;
mod year;

pub use extractor::PropertyFeatureExtractor;
