pub mod data;
pub mod entities;

use std::collections::HashSet;

use crate::domain::common::entities::app_errors::CoreError;

pub use entities::{DishEntry, DishFamily, Nutrition};

/// Immutable set of dishes the matcher resolves labels against.
///
/// Declaration order is significant: it is the tie-break order for equal match
/// scores and the pick order for family fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct DishCatalog {
    entries: Vec<DishEntry>,
}

impl DishCatalog {
    pub fn new(entries: Vec<DishEntry>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if !seen.insert(entry.name.to_lowercase()) {
                return Err(CoreError::Invalid(format!(
                    "duplicate dish name in catalog: {}",
                    entry.name
                )));
            }
            if !entry.nutrition.is_valid() {
                return Err(CoreError::Invalid(format!(
                    "negative or non-finite nutrition value for {}",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The bundled hawker-centre catalog.
    pub fn local() -> Self {
        Self {
            entries: data::local_dishes(),
        }
    }

    pub fn entries(&self) -> &[DishEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup by canonical name.
    pub fn find_by_name(&self, name: &str) -> Option<&DishEntry> {
        let wanted = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|dish| dish.name.to_lowercase() == wanted)
    }

    pub fn first_in_family(&self, family: DishFamily) -> Option<&DishEntry> {
        self.entries.iter().find(|dish| dish.family == family)
    }

    /// Dish names in alphabetical order, for correction pickers.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|d| d.name.clone()).collect();
        names.sort();
        names
    }
}

impl Default for DishCatalog {
    fn default() -> Self {
        Self::local()
    }
}
