//! Floor extraction.

use regex::Regex;

/// One floor rule: a pattern plus either a canonical replacement token or,
/// when `canonical` is `None`, a pass-through of the first capture group.
struct FloorRule {
    pattern: Regex,
    canonical: Option<&'static str>,
}

/// Ordered floor rules: ground-floor and basement terms before numeric
/// floor patterns.
pub(crate) struct FloorRules {
    battery: Vec<FloorRule>,
}

impl FloorRules {
    pub(crate) fn new() -> Self {
        let rule = |pattern: &str, canonical: Option<&'static str>| FloorRule {
            pattern: Regex::new(pattern).expect("valid regex"),
            canonical,
        };
        let battery = vec![
            rule(r"\br/c\b", Some("R/C")),
            rule(r"r[ée]s[ -]do[ -]ch[ãa]o", Some("R/C")),
            rule(r"t[ée]rreo", Some("R/C")),
            rule(r"sub[ -]cave", Some("Cave")),
            rule(r"\bcave\b", Some("Cave")),
            rule(r"(\d+)\s*[ºo°]\s*andar", None),
            rule(r"piso\s*:?\s*(\d+)", None),
            rule(r"andar\s*:?\s*(\d+)", None),
        ];
        Self { battery }
    }

    pub(crate) fn extract(&self, haystack: &str) -> Option<String> {
        for rule in &self.battery {
            let Some(captures) = rule.pattern.captures(haystack) else {
                continue;
            };
            if let Some(canonical) = rule.canonical {
                return Some(canonical.to_owned());
            }
            if let Some(group) = captures.get(1) {
                return Some(group.as_str().split_whitespace().collect::<Vec<_>>().join(" "));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_floor_terms_normalize_to_rc() {
        let rules = FloorRules::new();
        assert_eq!(rules.extract("loja em r/c com montra").as_deref(), Some("R/C"));
        assert_eq!(rules.extract("rés do chão direito").as_deref(), Some("R/C"));
        assert_eq!(rules.extract("andar térreo").as_deref(), Some("R/C"));
    }

    #[test]
    fn basement_terms_normalize_to_cave() {
        let rules = FloorRules::new();
        assert_eq!(rules.extract("arrumos na cave").as_deref(), Some("Cave"));
        assert_eq!(rules.extract("garagem em sub-cave").as_deref(), Some("Cave"));
    }

    #[test]
    fn numeric_floor_passes_through() {
        let rules = FloorRules::new();
        assert_eq!(rules.extract("apartamento no 3º andar").as_deref(), Some("3"));
        assert_eq!(rules.extract("piso: 7").as_deref(), Some("7"));
        assert_eq!(rules.extract("andar: 2").as_deref(), Some("2"));
    }

    #[test]
    fn ground_floor_wins_over_numeric_mention() {
        let rules = FloorRules::new();
        let text = "r/c de prédio com 5º andar recuado";
        assert_eq!(rules.extract(text).as_deref(), Some("R/C"));
    }

    #[test]
    fn no_floor_yields_none() {
        let rules = FloorRules::new();
        assert_eq!(rules.extract("moradia isolada com quintal"), None);
    }
}
