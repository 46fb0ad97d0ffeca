use serde::{Deserialize, Serialize};

use crate::models::plan::MacroSplit;

/// A catalog food with nutrition per 100 g.
///
/// Reference data: entries are loaded once and never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: String,

    pub name: String,

    /// Category tag, e.g. "protein", "vegetable", "grain", "fat".
    pub category: String,

    pub protein_per_100g: f64,

    pub carb_per_100g: f64,

    pub fat_per_100g: f64,

    pub kcal_per_100g: f64,

    pub fiber_per_100g: f64,

    /// Energy density in kcal per gram.
    pub energy_density: f64,
}

impl FoodEntry {
    /// Macros supplied by `grams` of this food.
    pub fn macros_for(&self, grams: f64) -> MacroSplit {
        let factor = grams / 100.0;
        MacroSplit {
            kcal: self.kcal_per_100g * factor,
            protein_g: self.protein_per_100g * factor,
            carb_g: self.carb_per_100g * factor,
            fat_g: self.fat_per_100g * factor,
        }
    }

    /// Basic validation: non-negative nutrition values and a non-empty id.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && self.kcal_per_100g >= 0.0
            && self.protein_per_100g >= 0.0
            && self.carb_per_100g >= 0.0
            && self.fat_per_100g >= 0.0
            && self.fiber_per_100g >= 0.0
            && self.energy_density >= 0.0
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

impl PartialEq for FoodEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodEntry {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodEntry {
        FoodEntry {
            id: "chicken_breast".to_string(),
            name: "Chicken breast".to_string(),
            category: "protein".to_string(),
            protein_per_100g: 31.0,
            carb_per_100g: 0.0,
            fat_per_100g: 3.6,
            kcal_per_100g: 165.0,
            fiber_per_100g: 0.0,
            energy_density: 1.65,
        }
    }

    #[test]
    fn test_macros_for_scales_linearly() {
        let food = sample_food();
        let split = food.macros_for(150.0);
        assert!((split.protein_g - 46.5).abs() < 1e-9);
        assert!((split.kcal - 247.5).abs() < 1e-9);
        assert!((split.carb_g - 0.0).abs() < 1e-9);
        assert!((split.fat_g - 5.4).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        let food = sample_food();
        assert!(food.is_valid());

        let mut invalid = sample_food();
        invalid.protein_per_100g = -1.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let food1 = sample_food();
        let mut food2 = sample_food();
        food2.id = "CHICKEN_BREAST".to_string();
        assert_eq!(food1, food2);
    }
}
