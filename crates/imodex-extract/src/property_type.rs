//! Property-type extraction.

/// Literal phrase → canonical type, checked by containment in order.
/// Synonyms and common misspellings fold into the canonical label.
const PHRASES: &[(&str, &str)] = &[
    ("apartamento", "apartamento"),
    ("apartmento", "apartamento"),
    ("moradia", "moradia"),
    ("vivenda", "moradia"),
    ("terreno", "terreno"),
    ("loja", "loja"),
    ("espaço comercial", "loja"),
    ("armazém", "armazém"),
    ("armazem", "armazém"),
    ("escritório", "escritório"),
    ("escritorio", "escritório"),
    ("garagem", "garagem"),
    ("quinta", "quinta"),
    ("herdade", "quinta"),
    ("prédio", "prédio"),
    ("predio", "prédio"),
    ("edifício", "prédio"),
    ("edificio", "prédio"),
];

/// Type extraction with source priority: the title is checked first, then
/// the feature text, then the description. A title match wins even when a
/// later source would also match.
pub(crate) struct TypeRules;

impl TypeRules {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn extract(
        &self,
        title: &str,
        feature_text: &str,
        description: &str,
    ) -> Option<String> {
        [title, feature_text, description]
            .iter()
            .find_map(|source| Self::match_source(source))
    }

    fn match_source(source: &str) -> Option<String> {
        PHRASES
            .iter()
            .find(|(phrase, _)| source.contains(phrase))
            .map(|(_, canonical)| (*canonical).to_owned())
    }
}
