use std::collections::HashMap;

use crate::error::{CoachError, Result};
use crate::models::FoodEntry;

/// Read-only lookup table of foods, keyed by lowercase id.
pub struct FoodCatalog {
    foods: HashMap<String, FoodEntry>,
}

impl FoodCatalog {
    /// Build a catalog from a list of entries.
    ///
    /// Deduplicates by lowercase id, last occurrence wins.
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        let mut foods = HashMap::new();
        for entry in entries {
            foods.insert(entry.key(), entry);
        }
        Self { foods }
    }

    /// Point lookup by id (case-insensitive). A miss means a template or plan
    /// references a food this catalog no longer carries.
    pub fn get(&self, id: &str) -> Result<&FoodEntry> {
        self.foods
            .get(&id.to_lowercase())
            .ok_or_else(|| CoachError::FoodNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.foods.contains_key(&id.to_lowercase())
    }

    /// Find a food by display name (case-insensitive exact match).
    pub fn find_by_name(&self, name: &str) -> Option<&FoodEntry> {
        self.foods
            .values()
            .find(|f| f.name.to_lowercase() == name.to_lowercase())
    }

    /// All entries, sorted by display name for stable listings.
    pub fn sorted_by_name(&self) -> Vec<&FoodEntry> {
        let mut entries: Vec<&FoodEntry> = self.foods.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Entries as an owned list, for serialization.
    pub fn to_entries(&self) -> Vec<FoodEntry> {
        self.foods.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
