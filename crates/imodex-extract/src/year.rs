//! Construction-year extraction.

use chrono::Datelike;
use regex::Regex;

/// Earliest plausible construction year for listed housing stock.
const MIN_YEAR: i32 = 1850;

/// Ordered year patterns: labelled forms before the bare 4-digit fallback.
pub(crate) struct YearRules {
    battery: Vec<Regex>,
}

impl YearRules {
    pub(crate) fn new() -> Self {
        let battery = [
            r"ano de constru[çc][ãa]o\s*:?\s*(\d{4})",
            r"constru[íi]do em\s*(\d{4})",
            r"ano\s*:\s*(\d{4})",
            r"constru[çc][ãa]o\s*:\s*(\d{4})",
            r"\b(\d{4})\b",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect();
        Self { battery }
    }

    /// Returns the first in-range candidate that is not a renovation year.
    ///
    /// A candidate preceded anywhere in the text by `renovado`/`renovação`
    /// is a renovation date, not a construction date; it is skipped and the
    /// scan continues with the next candidate.
    pub(crate) fn extract(&self, haystack: &str) -> Option<String> {
        let current_year = chrono::Utc::now().year();
        for pattern in &self.battery {
            for captures in pattern.captures_iter(haystack) {
                let Some(group) = captures.get(1) else {
                    continue;
                };
                let Ok(year) = group.as_str().parse::<i32>() else {
                    continue;
                };
                if !(MIN_YEAR..=current_year).contains(&year) {
                    continue;
                }
                if is_renovation_year(haystack, group.start()) {
                    continue;
                }
                return Some(group.as_str().to_owned());
            }
        }
        None
    }
}

fn is_renovation_year(haystack: &str, match_start: usize) -> bool {
    let before = &haystack[..match_start];
    ["renovado", "renovada", "renovação", "renovacao"]
        .iter()
        .any(|marker| before.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_construction_year_wins() {
        let rules = YearRules::new();
        assert_eq!(
            rules.extract("construído em 1998, renovado em 2015").as_deref(),
            Some("1998")
        );
    }

    #[test]
    fn renovation_year_is_rejected_and_scan_continues() {
        let rules = YearRules::new();
        // The labelled candidate sits after the marker and is rejected; the
        // bare-year fallback still finds the clean candidate to its left.
        let text = "prédio de 1920, renovado, ano de construção: 2015";
        assert_eq!(rules.extract(text).as_deref(), Some("1920"));
    }

    #[test]
    fn bare_year_fallback_applies_range_check() {
        let rules = YearRules::new();
        assert_eq!(rules.extract("prédio de 1920 no centro").as_deref(), Some("1920"));
        // Below range and in the future: both rejected.
        assert_eq!(rules.extract("edifício de 1790"), None);
        assert_eq!(rules.extract("entrega prevista para 2085"), None);
    }

    #[test]
    fn labelled_patterns_take_precedence_over_bare_years() {
        let rules = YearRules::new();
        let text = "referência 2001. ano de construção: 1975";
        assert_eq!(rules.extract(text).as_deref(), Some("1975"));
    }

    #[test]
    fn renovation_marker_anywhere_before_candidate_rejects_it() {
        let rules = YearRules::new();
        let text = "renovado com carinho ao longo dos anos por familia dedicada, 1998";
        assert_eq!(rules.extract(text), None);
    }

    #[test]
    fn no_year_yields_none() {
        let rules = YearRules::new();
        assert_eq!(rules.extract("moradia com jardim"), None);
    }
}
