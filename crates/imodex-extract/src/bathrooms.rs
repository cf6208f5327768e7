//! Bathroom-count extraction.

use regex::Regex;

/// Counts outside this range are scraping noise (phone digits, references)
/// and are rejected.
const MAX_BATHROOMS: u32 = 20;

/// Ordered bathroom patterns, count-first forms before labelled forms per
/// synonym.
pub(crate) struct BathroomRules {
    battery: Vec<Regex>,
}

impl BathroomRules {
    pub(crate) fn new() -> Self {
        let battery = [
            r"(\d+)\s*casas? de banho",
            r"casas? de banho\s*:?\s*(\d+)",
            r"wc\s*:?\s*(\d+)",
            r"(\d+)\s*wc",
            r"banheiros?\s*:?\s*(\d+)",
            r"(\d+)\s*banheiros?",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect();
        Self { battery }
    }

    pub(crate) fn extract(&self, haystack: &str) -> Option<String> {
        for pattern in &self.battery {
            for captures in pattern.captures_iter(haystack) {
                let Some(group) = captures.get(1) else {
                    continue;
                };
                let Ok(count) = group.as_str().parse::<u32>() else {
                    continue;
                };
                if count <= MAX_BATHROOMS {
                    return Some(count.to_string());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_before_label() {
        let rules = BathroomRules::new();
        assert_eq!(rules.extract("3 casas de banho").as_deref(), Some("3"));
        assert_eq!(rules.extract("1 casa de banho").as_deref(), Some("1"));
    }

    #[test]
    fn labelled_forms() {
        let rules = BathroomRules::new();
        assert_eq!(rules.extract("casas de banho: 2").as_deref(), Some("2"));
        assert_eq!(rules.extract("wc: 2").as_deref(), Some("2"));
        assert_eq!(rules.extract("2 wc completos").as_deref(), Some("2"));
        assert_eq!(rules.extract("banheiros: 4").as_deref(), Some("4"));
    }

    #[test]
    fn out_of_range_count_is_rejected() {
        let rules = BathroomRules::new();
        assert_eq!(rules.extract("25 casas de banho"), None);
    }

    #[test]
    fn zero_is_a_valid_count() {
        let rules = BathroomRules::new();
        assert_eq!(rules.extract("wc: 0").as_deref(), Some("0"));
    }

    #[test]
    fn no_mention_yields_none() {
        let rules = BathroomRules::new();
        assert_eq!(rules.extract("cozinha equipada"), None);
    }
}
