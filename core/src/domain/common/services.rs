use crate::domain::{
    common::{HawkerLensConfig, ports::Clock},
    dish_catalog::DishCatalog,
    dish_matching::{matcher::DishMatcher, ports::Classifier},
    storage::ports::KeyValueStore,
};

/// Holds the collaborators every service operation runs against.
///
/// The service traits of each domain module (`DishRecognitionService`,
/// `MealLogService`, `NutrientAlertService`, ...) are implemented on this type.
pub struct Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    pub store: S,
    pub classifier: CL,
    pub clock: CK,
    pub matcher: DishMatcher,
    pub config: HawkerLensConfig,
}

impl<S, CL, CK> Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    pub fn new(store: S, classifier: CL, clock: CK, config: HawkerLensConfig) -> Self {
        let matcher = DishMatcher::new(DishCatalog::local()).with_fallback(&config.matching);

        Self {
            store,
            classifier,
            clock,
            matcher,
            config,
        }
    }

    pub fn with_matcher(mut self, matcher: DishMatcher) -> Self {
        self.matcher = matcher;
        self
    }
}
