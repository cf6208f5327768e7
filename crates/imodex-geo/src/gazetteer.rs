//! Static gazetteer of Portuguese parishes.
//!
//! Entries live in an explicit ordered `Vec` and every lookup scans it
//! front-to-back. Registration order is part of the contract: when the fuzzy
//! containment test matches several entries, the first registered one wins,
//! so reordering the table changes observable behavior.

use imodex_core::Coordinates;

use crate::data;
use crate::normalize::normalize_name;

/// One parish record: normalized lookup key, administrative hierarchy, and a
/// representative coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerEntry {
    /// Pre-normalized parish key (see [`normalize_name`]).
    pub key: String,
    pub municipality: String,
    pub district: String,
    pub coordinates: Coordinates,
}

/// Ordered, read-only parish table with exact and fuzzy lookups.
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
}

impl Gazetteer {
    /// Builds a gazetteer from an ordered entry list. The order given here
    /// is the fuzzy-lookup tie-break order.
    #[must_use]
    pub fn new(entries: Vec<GazetteerEntry>) -> Self {
        Self { entries }
    }

    /// The built-in table of Portuguese parishes.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(data::builtin_entries())
    }

    /// Returns the entry whose key equals the normalized query exactly.
    #[must_use]
    pub fn lookup_exact(&self, name: &str) -> Option<&GazetteerEntry> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Returns the first registered entry whose key contains the normalized
    /// query or is contained by it.
    ///
    /// Overlapping entries (a sub-parish name that is a substring of a
    /// compound union-parish key) make this ambiguous; the registration
    /// order decides, matching the long-standing behavior downstream
    /// consumers rely on.
    #[must_use]
    pub fn lookup_fuzzy(&self, name: &str) -> Option<&GazetteerEntry> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.key.contains(&key) || key.contains(&entry.key))
    }

    /// Returns the first entry belonging to the named municipality.
    ///
    /// The coordinates are that entry's point — a coarse representative for
    /// the whole municipality, not a centroid. Known limitation, kept.
    #[must_use]
    pub fn lookup_by_municipality(&self, name: &str) -> Option<&GazetteerEntry> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| normalize_name(&entry.municipality) == key)
    }

    /// Returns the first entry belonging to the named district. Same coarse
    /// representative-point caveat as [`Self::lookup_by_municipality`].
    #[must_use]
    pub fn lookup_by_district(&self, name: &str) -> Option<&GazetteerEntry> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| normalize_name(&entry.district) == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, municipality: &str, district: &str, lat: f64, lng: f64) -> GazetteerEntry {
        GazetteerEntry {
            key: key.to_owned(),
            municipality: municipality.to_owned(),
            district: district.to_owned(),
            coordinates: Coordinates { lat, lng },
        }
    }

    #[test]
    fn lookup_exact_finds_porto() {
        let gazetteer = Gazetteer::builtin();
        let hit = gazetteer.lookup_exact("porto").expect("porto should exist");
        assert_eq!(hit.municipality, "Porto");
        assert_eq!(hit.district, "Porto");
        assert!((hit.coordinates.lat - 41.1579).abs() < 1e-9);
        assert!((hit.coordinates.lng - -8.6291).abs() < 1e-9);
    }

    #[test]
    fn lookup_exact_normalizes_the_query() {
        let gazetteer = Gazetteer::builtin();
        assert!(gazetteer.lookup_exact("Évora").is_some());
        assert!(gazetteer.lookup_exact("  PORTO  ").is_some());
    }

    #[test]
    fn lookup_exact_misses_unknown_parish() {
        let gazetteer = Gazetteer::builtin();
        assert!(gazetteer.lookup_exact("atlantis").is_none());
        assert!(gazetteer.lookup_exact("").is_none());
    }

    #[test]
    fn lookup_fuzzy_matches_substring_in_either_direction() {
        let gazetteer = Gazetteer::builtin();
        // Query contains the key.
        let hit = gazetteer.lookup_fuzzy("freguesia de cedofeita").unwrap();
        assert_eq!(hit.key, "cedofeita");
        // Key contains the query.
        let hit = gazetteer.lookup_fuzzy("cedofeit").unwrap();
        assert_eq!(hit.key, "cedofeita");
    }

    #[test]
    fn lookup_fuzzy_first_registered_entry_wins() {
        let gazetteer = Gazetteer::new(vec![
            entry("santo antonio dos olivais", "Coimbra", "Coimbra", 40.21, -8.40),
            entry("santo antonio", "Lisboa", "Lisboa", 38.72, -9.15),
        ]);
        // Both keys contain the query; the first registered entry must win.
        let hit = gazetteer.lookup_fuzzy("santo antonio").unwrap();
        assert_eq!(hit.municipality, "Coimbra");
    }

    #[test]
    fn lookup_by_municipality_returns_first_entry_in_registration_order() {
        let gazetteer = Gazetteer::new(vec![
            entry("ramalde", "Porto", "Porto", 41.16, -8.64),
            entry("bonfim", "Porto", "Porto", 41.15, -8.59),
        ]);
        let hit = gazetteer.lookup_by_municipality("Porto").unwrap();
        assert_eq!(hit.key, "ramalde");
    }

    #[test]
    fn lookup_by_district_matches_normalized_district_name() {
        let gazetteer = Gazetteer::builtin();
        let hit = gazetteer.lookup_by_district("Évora").unwrap();
        assert_eq!(hit.district, "Évora");
    }
}
