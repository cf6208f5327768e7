//! Condition extraction.

use regex::Regex;

/// Literal phrase → canonical condition label, checked by containment in
/// order. Renovation phrases come before `novo`/`nova`: "renovada" contains
/// "nova", so the order is what keeps a renovated listing from reading as
/// new.
const PHRASES: &[(&str, &str)] = &[
    ("em construção", "em construção"),
    ("por recuperar", "por renovar"),
    ("para recuperar", "por renovar"),
    ("por renovar", "por renovar"),
    ("para renovar", "por renovar"),
    ("para remodelar", "por renovar"),
    ("restauro", "por renovar"),
    ("renovado", "renovado"),
    ("renovada", "renovado"),
    ("remodelado", "renovado"),
    ("remodelada", "renovado"),
    ("como novo", "novo"),
    ("novo", "novo"),
    ("nova", "novo"),
    ("usado", "usado"),
    ("usada", "usado"),
];

/// Condition rules: the literal phrase map first, labelled fallback
/// patterns second.
pub(crate) struct ConditionRules {
    labelled: Vec<Regex>,
}

impl ConditionRules {
    pub(crate) fn new() -> Self {
        let labelled = [
            r"condição\s*:\s*([^,;.\n]+)",
            r"estado\s*:\s*([^,;.\n]+)",
            r"fase de acabamento\s*:\s*([^,;.\n]+)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect();
        Self { labelled }
    }

    pub(crate) fn extract(&self, haystack: &str) -> Option<String> {
        for (phrase, canonical) in PHRASES {
            if haystack.contains(phrase) {
                return Some((*canonical).to_owned());
            }
        }

        for pattern in &self.labelled {
            let Some(captures) = pattern.captures(haystack) else {
                continue;
            };
            let Some(group) = captures.get(1) else {
                continue;
            };
            let captured = group.as_str().trim();
            if captured.is_empty() {
                continue;
            }
            let canonical = PHRASES
                .iter()
                .find(|(phrase, _)| *phrase == captured)
                .map(|(_, canonical)| *canonical);
            return Some(canonical.unwrap_or(captured).to_owned());
        }

        None
    }
}
