//! Tipology (bedroom-count code) extraction.

use regex::Regex;

/// Room counts above this are scraping noise when written as words
/// ("12 quartos" in a hotel listing), so the word form is range-checked.
/// Explicit T-codes are taken at face value.
const MAX_WORD_FORM_ROOMS: u32 = 10;

/// Ordered tipology patterns: explicit T-code, room-count words, labelled
/// fields.
pub(crate) struct TipologyRules {
    t_code: Regex,
    room_words: Regex,
    labelled: Vec<Regex>,
}

impl TipologyRules {
    pub(crate) fn new() -> Self {
        Self {
            t_code: Regex::new(r"\bt(\d{1,2})(?:\s*\+\s*(\d+))?").expect("valid regex"),
            room_words: Regex::new(r"(\d+)\s*(?:assoalhadas?|quartos?|bedrooms?)")
                .expect("valid regex"),
            // Both label forms accept a bare number; an explicit T-code after
            // the label is already claimed by the first-priority pattern.
            labelled: [
                r"tipologia\s*:?\s*t?(\d{1,2})(?:\s*\+\s*(\d+))?",
                r"tipo\s*:?\s*t?(\d{1,2})(?:\s*\+\s*(\d+))?",
            ]
            .iter()
            .map(|pattern| Regex::new(pattern).expect("valid regex"))
            .collect(),
        }
    }

    pub(crate) fn extract(&self, haystack: &str) -> Option<String> {
        if let Some(captures) = self.t_code.captures(haystack) {
            return Some(format_code(&captures));
        }

        for captures in self.room_words.captures_iter(haystack) {
            let Some(group) = captures.get(1) else {
                continue;
            };
            let Ok(rooms) = group.as_str().parse::<u32>() else {
                continue;
            };
            if rooms <= MAX_WORD_FORM_ROOMS {
                return Some(format!("T{rooms}"));
            }
        }

        for pattern in &self.labelled {
            if let Some(captures) = pattern.captures(haystack) {
                return Some(format_code(&captures));
            }
        }

        None
    }
}

fn format_code(captures: &regex::Captures<'_>) -> String {
    let base = captures.get(1).map_or("", |m| m.as_str());
    match captures.get(2) {
        Some(extra) => format!("T{base}+{}", extra.as_str()),
        None => format!("T{base}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_t_code_with_suffix() {
        let rules = TipologyRules::new();
        assert_eq!(rules.extract("t3+1 duplex com vista").as_deref(), Some("T3+1"));
        assert_eq!(rules.extract("apartamento t2 no centro").as_deref(), Some("T2"));
    }

    #[test]
    fn t_code_requires_a_word_boundary() {
        let rules = TipologyRules::new();
        // "lote 5" or codes like "lt3" must not read as tipologies.
        assert_eq!(rules.extract("referência lt3 do lote"), None);
    }

    #[test]
    fn room_count_words_produce_t_code() {
        let rules = TipologyRules::new();
        assert_eq!(rules.extract("moradia com 4 quartos").as_deref(), Some("T4"));
        assert_eq!(rules.extract("5 assoalhadas amplas").as_deref(), Some("T5"));
        assert_eq!(rules.extract("3 bedrooms").as_deref(), Some("T3"));
    }

    #[test]
    fn room_count_words_are_range_checked() {
        let rules = TipologyRules::new();
        assert_eq!(rules.extract("residencial com 14 quartos"), None);
    }

    #[test]
    fn labelled_tipology_with_bare_number() {
        let rules = TipologyRules::new();
        assert_eq!(rules.extract("tipologia: 3").as_deref(), Some("T3"));
        assert_eq!(rules.extract("tipo: 2").as_deref(), Some("T2"));
    }

    #[test]
    fn no_tipology_yields_none() {
        let rules = TipologyRules::new();
        assert_eq!(rules.extract("loja com montra"), None);
    }
}
