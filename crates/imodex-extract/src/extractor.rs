//! The field-extraction pipeline.

use imodex_core::NormalizedProperty;
use serde_json::Value;

use crate::areas::AreaRules;
use crate::bathrooms::BathroomRules;
use crate::condition::ConditionRules;
use crate::floor::FloorRules;
use crate::haystack::flatten_features;
use crate::property_type::TypeRules;
use crate::tipology::TipologyRules;
use crate::year::YearRules;

/// Mines structured attributes out of a listing's feature bag, title, and
/// description.
///
/// Construction compiles every pattern battery once; `extract` is then
/// cheap enough to run per listing. Every field extractor is independent
/// and returns `None` on a miss — no input shape makes extraction fail.
pub struct PropertyFeatureExtractor {
    areas: AreaRules,
    bathrooms: BathroomRules,
    condition: ConditionRules,
    floor: FloorRules,
    property_type: TypeRules,
    tipology: TipologyRules,
    year: YearRules,
}

impl PropertyFeatureExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            areas: AreaRules::new(),
            bathrooms: BathroomRules::new(),
            condition: ConditionRules::new(),
            floor: FloorRules::new(),
            property_type: TypeRules::new(),
            tipology: TipologyRules::new(),
            year: YearRules::new(),
        }
    }

    /// Runs every field battery. The type battery sees title, feature text,
    /// and description separately (source priority); every other battery
    /// works on one haystack of flattened features plus description.
    #[must_use]
    pub fn extract(
        &self,
        features: &Value,
        title: &str,
        description: &str,
    ) -> NormalizedProperty {
        let feature_text = flatten_features(features).to_lowercase();
        let title = title.to_lowercase();
        let description = description.to_lowercase();

        let mut haystack = String::with_capacity(feature_text.len() + description.len() + 1);
        haystack.push_str(&feature_text);
        haystack.push(' ');
        haystack.push_str(&description);

        let (area_useful, area_total) = self.areas.extract(&haystack);

        NormalizedProperty {
            property_type: self.property_type.extract(&title, &feature_text, &description),
            tipology: self.tipology.extract(&haystack),
            area_total,
            area_useful,
            year: self.year.extract(&haystack),
            floor: self.floor.extract(&haystack),
            condition: self.condition.extract(&haystack),
            bathrooms: self.bathrooms.extract(&haystack),
        }
    }
}

impl Default for PropertyFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
