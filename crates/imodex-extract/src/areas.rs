//! Useful and total area extraction.

use regex::Regex;

const NUMBER: &str = r"(\d+(?:[.,]\d+)?)";

/// Ordered pattern batteries for the two area figures. The useful battery
/// runs first; within each battery the first matching pattern wins.
pub(crate) struct AreaRules {
    useful: Vec<Regex>,
    total: Vec<Regex>,
}

impl AreaRules {
    pub(crate) fn new() -> Self {
        let compile = |labels: &[&str]| {
            labels
                .iter()
                .map(|label| {
                    Regex::new(&format!(r"{label}\s*:?\s*(?:de\s*)?{NUMBER}"))
                        .expect("valid regex")
                })
                .collect()
        };
        Self {
            useful: compile(&["área útil", "área interior", "útil"]),
            total: compile(&[
                "área bruta",
                "área total",
                "área de construção",
                "área construída",
                "área",
                "tamanho",
            ]),
        }
    }

    /// Returns `(useful, total)`. When only a total-labelled figure is
    /// present it is reclassified as useful — listings most often report the
    /// useful area, whatever the label says — and total is left empty.
    pub(crate) fn extract(&self, haystack: &str) -> (Option<String>, Option<String>) {
        let useful = first_capture(&self.useful, haystack);
        let total = first_capture(&self.total, haystack);
        match (useful, total) {
            (None, Some(value)) => (Some(value), None),
            (useful, total) => (useful, total),
        }
    }
}

fn first_capture(battery: &[Regex], haystack: &str) -> Option<String> {
    battery.iter().find_map(|pattern| {
        pattern
            .captures(haystack)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_labels_present() {
        let rules = AreaRules::new();
        let (useful, total) = rules.extract("área útil: 80 m², área bruta: 100 m²");
        assert_eq!(useful.as_deref(), Some("80"));
        assert_eq!(total.as_deref(), Some("100"));
    }

    #[test]
    fn total_only_is_reclassified_as_useful() {
        let rules = AreaRules::new();
        let (useful, total) = rules.extract("área total: 90 m²");
        assert_eq!(useful.as_deref(), Some("90"));
        assert_eq!(total, None);
    }

    #[test]
    fn bare_area_label_counts_as_total_battery() {
        let rules = AreaRules::new();
        let (useful, total) = rules.extract("área: 120 m² de terreno");
        assert_eq!(useful.as_deref(), Some("120"));
        assert_eq!(total, None);
    }

    #[test]
    fn bare_area_does_not_steal_the_useful_label() {
        let rules = AreaRules::new();
        let (useful, total) = rules.extract("área útil de 75 m² e área bruta de 90 m²");
        assert_eq!(useful.as_deref(), Some("75"));
        assert_eq!(total.as_deref(), Some("90"));
    }

    #[test]
    fn decimal_values_are_captured_whole() {
        let rules = AreaRules::new();
        let (useful, _) = rules.extract("área útil: 82,5 m²");
        assert_eq!(useful.as_deref(), Some("82,5"));
    }

    #[test]
    fn no_match_yields_nothing() {
        let rules = AreaRules::new();
        assert_eq!(rules.extract("moradia espaçosa com jardim"), (None, None));
    }
}
