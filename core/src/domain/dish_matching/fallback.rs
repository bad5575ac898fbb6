use crate::domain::{
    common::MatchingConfig,
    dish_catalog::{DishCatalog, DishEntry, DishFamily},
    dish_matching::text_matcher::TextMatcher,
};

/// Strong single terms that pin a label to a dish family.
const FAMILY_TERMS: &[(&str, DishFamily)] = &[
    ("noodle", DishFamily::Noodles),
    ("pasta", DishFamily::Noodles),
    ("ramen", DishFamily::Noodles),
    ("spaghetti", DishFamily::Noodles),
    ("vermicelli", DishFamily::Noodles),
    ("rice", DishFamily::Rice),
    ("risotto", DishFamily::Rice),
    ("pilaf", DishFamily::Rice),
    ("paella", DishFamily::Rice),
    ("soup", DishFamily::Soup),
    ("stew", DishFamily::Soup),
    ("bread", DishFamily::Bread),
    ("pancake", DishFamily::Bread),
];

/// Secondary pass for confident but non-specific labels that scored nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyFallback {
    pub threshold: f64,
    pub factor: f64,
}

impl FamilyFallback {
    pub fn from_config(config: &MatchingConfig) -> Option<Self> {
        config.aggressive_fallback.then_some(Self {
            threshold: config.aggressive_fallback_threshold,
            factor: config.aggressive_fallback_factor,
        })
    }

    /// First catalog dish of the first family whose term hits, with its confidence.
    pub fn resolve<'a>(
        &self,
        catalog: &'a DishCatalog,
        text_matcher: &dyn TextMatcher,
        search_text: &str,
        probability: f64,
    ) -> Option<(&'a DishEntry, f64)> {
        if probability < self.threshold {
            return None;
        }

        FAMILY_TERMS
            .iter()
            .filter(|(term, _)| text_matcher.matches(search_text, term))
            .find_map(|(_, family)| catalog.first_in_family(*family))
            .map(|dish| (dish, probability * self.factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish_matching::text_matcher::SubstringMatcher;

    fn fallback() -> FamilyFallback {
        FamilyFallback {
            threshold: 0.6,
            factor: 0.85,
        }
    }

    #[test]
    fn picks_first_dish_of_family() {
        let catalog = DishCatalog::local();

        let (dish, confidence) = fallback()
            .resolve(&catalog, &SubstringMatcher, "spaghetti", 0.8)
            .unwrap();

        assert_eq!(dish.name, "Laksa");
        assert!((confidence - 0.68).abs() < 1e-9);
    }

    #[test]
    fn ignores_low_probability() {
        let catalog = DishCatalog::local();
        assert!(
            fallback()
                .resolve(&catalog, &SubstringMatcher, "risotto", 0.59)
                .is_none()
        );
    }

    #[test]
    fn disabled_by_config() {
        let config = MatchingConfig {
            aggressive_fallback: false,
            ..MatchingConfig::default()
        };
        assert!(FamilyFallback::from_config(&config).is_none());
    }
}
