//! Location resolution: platform parse strategies, gazetteer cascade, and
//! the geocoding fallback.
//!
//! Resolution never fails. The worst case is a result carrying the raw
//! parsed strings with no coordinates.

use imodex_core::{LocationInput, ResolvedLocation};

use crate::gazetteer::{Gazetteer, GazetteerEntry};
use crate::geocode::Geocoder;

/// How a platform's location text decomposes into ordered address parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Comma-delimited, two-part heuristic: first part is a parish or
    /// neighborhood candidate, second a municipality candidate. A single
    /// part doubles as both candidates. No district fallback.
    TwoPart,
    /// Comma-delimited, positional heuristic: first part is the parish, the
    /// last part the district and second-to-last the municipality when three
    /// or more parts exist. Cascades parish → municipality → district.
    Positional,
}

/// A decomposed location query. `parish`/`municipality`/`district` are the
/// positional strings preserved verbatim in the output on a total miss;
/// `municipality_candidate` is the string fed to the municipality lookup,
/// which for a single-part two-part query is the part itself even though it
/// is not reported as a municipality.
#[derive(Debug, Default, PartialEq)]
struct ParsedQuery {
    parish: Option<String>,
    municipality: Option<String>,
    district: Option<String>,
    municipality_candidate: Option<String>,
}

impl ParseStrategy {
    fn decompose(self, parts: &[String]) -> ParsedQuery {
        match self {
            ParseStrategy::TwoPart => match parts {
                [] => ParsedQuery::default(),
                [single] => ParsedQuery {
                    parish: Some(single.clone()),
                    municipality_candidate: Some(single.clone()),
                    ..ParsedQuery::default()
                },
                [first, second, ..] => ParsedQuery {
                    parish: Some(first.clone()),
                    municipality: Some(second.clone()),
                    municipality_candidate: Some(second.clone()),
                    ..ParsedQuery::default()
                },
            },
            ParseStrategy::Positional => match parts {
                [] => ParsedQuery::default(),
                [single] => ParsedQuery {
                    parish: Some(single.clone()),
                    ..ParsedQuery::default()
                },
                [first, second] => ParsedQuery {
                    parish: Some(first.clone()),
                    municipality: Some(second.clone()),
                    municipality_candidate: Some(second.clone()),
                    ..ParsedQuery::default()
                },
                [first, .., second_last, last] => ParsedQuery {
                    parish: Some(first.clone()),
                    municipality: Some(second_last.clone()),
                    district: Some(last.clone()),
                    municipality_candidate: Some(second_last.clone()),
                },
            },
        }
    }
}

/// Resolves location queries against a gazetteer, falling back to an
/// injected [`Geocoder`] when the gazetteer yields no coordinates.
pub struct LocationResolver<G> {
    gazetteer: Gazetteer,
    geocoder: G,
}

impl<G: Geocoder> LocationResolver<G> {
    pub fn new(gazetteer: Gazetteer, geocoder: G) -> Self {
        Self {
            gazetteer,
            geocoder,
        }
    }

    #[must_use]
    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Resolves a location query. Infallible: lookup and geocoding misses
    /// degrade to a partial result, never an error.
    pub async fn resolve(
        &self,
        input: &LocationInput,
        strategy: ParseStrategy,
        use_geocoding: bool,
    ) -> ResolvedLocation {
        let parts = split_parts(input);
        let parsed = strategy.decompose(&parts);
        let mut resolved = self.resolve_against_gazetteer(&parsed);

        if resolved.coordinates.is_none() && use_geocoding {
            let query = geocode_query(&resolved, input);
            if query.is_empty() {
                return resolved;
            }
            if let Some(geocoded) = self.geocoder.geocode(&query).await {
                resolved = merge(resolved, geocoded);
            }
        }

        resolved
    }

    /// Runs the lookup cascade (parish, municipality, district) and shapes
    /// the result. Whichever lookup succeeds first supplies district,
    /// municipality, and coordinates; the positionally identified parish
    /// string is preserved verbatim regardless of which level matched.
    fn resolve_against_gazetteer(&self, parsed: &ParsedQuery) -> ResolvedLocation {
        let hit = parsed
            .parish
            .as_deref()
            .and_then(|name| self.lookup_parish(name))
            .or_else(|| {
                parsed
                    .municipality_candidate
                    .as_deref()
                    .and_then(|name| self.gazetteer.lookup_by_municipality(name))
            })
            .or_else(|| {
                parsed
                    .district
                    .as_deref()
                    .and_then(|name| self.gazetteer.lookup_by_district(name))
            });

        match hit {
            Some(entry) => ResolvedLocation {
                district: Some(entry.district.clone()),
                municipality: Some(entry.municipality.clone()),
                parish: parsed.parish.clone(),
                coordinates: Some(entry.coordinates),
            },
            None => ResolvedLocation {
                district: parsed.district.clone(),
                municipality: parsed.municipality.clone(),
                parish: parsed.parish.clone(),
                coordinates: None,
            },
        }
    }

    fn lookup_parish(&self, name: &str) -> Option<&GazetteerEntry> {
        self.gazetteer
            .lookup_exact(name)
            .or_else(|| self.gazetteer.lookup_fuzzy(name))
    }
}

fn split_parts(input: &LocationInput) -> Vec<String> {
    let raw_parts: Vec<&str> = match input {
        LocationInput::Raw(text) => text.split(',').collect(),
        LocationInput::Parts(parts) => parts.iter().map(String::as_str).collect(),
    };
    raw_parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Builds the best-effort address text for the geocoding fallback: the known
/// admin parts joined smallest-to-largest, or the original query text when
/// nothing was parsed.
fn geocode_query(resolved: &ResolvedLocation, input: &LocationInput) -> String {
    let known: Vec<&str> = [
        resolved.parish.as_deref(),
        resolved.municipality.as_deref(),
        resolved.district.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if known.is_empty() {
        match input {
            LocationInput::Raw(text) => text.trim().to_owned(),
            LocationInput::Parts(parts) => parts.join(", "),
        }
    } else {
        known.join(", ")
    }
}

/// Merges a geocoded result into a partial one: already-known admin names
/// win, geocoded coordinates are always taken.
fn merge(partial: ResolvedLocation, geocoded: ResolvedLocation) -> ResolvedLocation {
    ResolvedLocation {
        district: partial.district.or(geocoded.district),
        municipality: partial.municipality.or(geocoded.municipality),
        parish: partial.parish.or(geocoded.parish),
        coordinates: geocoded.coordinates,
    }
}
