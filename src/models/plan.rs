use serde::{Deserialize, Serialize};

use crate::models::FoodEntry;

/// The five fixed daily meal slots, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    AfternoonSnack,
    Dinner,
    EveningSnack,
}

impl MealSlot {
    pub const IN_ORDER: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
        MealSlot::EveningSnack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon snack",
            MealSlot::Dinner => "Dinner",
            MealSlot::EveningSnack => "Evening snack",
        }
    }
}

/// How aggressive the calorie deficit is; drives the protein prescription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietIntensity {
    Gentle,
    Moderate,
    Restrictive,
}

impl DietIntensity {
    pub const ALL: [DietIntensity; 3] = [
        DietIntensity::Gentle,
        DietIntensity::Moderate,
        DietIntensity::Restrictive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietIntensity::Gentle => "gentle",
            DietIntensity::Moderate => "moderate",
            DietIntensity::Restrictive => "restrictive",
        }
    }
}

/// Calories plus the three macros, in grams. Used both for targets and totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

impl MacroSplit {
    /// Accumulate another split into this one.
    pub fn add(&mut self, other: &MacroSplit) {
        self.kcal += other.kcal;
        self.protein_g += other.protein_g;
        self.carb_g += other.carb_g;
        self.fat_g += other.fat_g;
    }
}

/// The daily macro targets: calories, grams, and percent of calories.
///
/// Gram and percent values are whole numbers; the percentages are derived
/// from the same calorie figures as the grams, so they stay consistent even
/// though the three need not sum to exactly 100 after rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPrescription {
    pub calories: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
    pub protein_percent: f64,
    pub carb_percent: f64,
    pub fat_percent: f64,
}

/// A concrete quantity of one food inside a meal.
///
/// Macros are what the chosen grams actually supply, not the target that
/// motivated the pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealItem {
    pub food_id: String,
    pub food_name: String,
    pub grams: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
    pub kcal: f64,
}

impl MealItem {
    /// Build an item from a catalog food and a gram quantity.
    pub fn from_food(food: &FoodEntry, grams: f64) -> Self {
        let supplied = food.macros_for(grams);
        Self {
            food_id: food.id.clone(),
            food_name: food.name.clone(),
            grams,
            protein_g: supplied.protein_g,
            carb_g: supplied.carb_g,
            fat_g: supplied.fat_g,
            kcal: supplied.kcal,
        }
    }

    pub fn macros(&self) -> MacroSplit {
        MacroSplit {
            kcal: self.kcal,
            protein_g: self.protein_g,
            carb_g: self.carb_g,
            fat_g: self.fat_g,
        }
    }
}

/// One meal: its slot, per-meal sub-targets, solved items, and rolled-up totals.
///
/// Built fresh on every plan generation; never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub targets: MacroSplit,
    pub items: Vec<MealItem>,
    pub totals: MacroSplit,
}

impl Meal {
    pub fn new(slot: MealSlot, targets: MacroSplit) -> Self {
        Self {
            slot,
            targets,
            items: Vec::new(),
            totals: MacroSplit::default(),
        }
    }

    /// Append an item and fold its macros into the meal totals.
    pub fn push_item(&mut self, item: MealItem) {
        self.totals.add(&item.macros());
        self.items.push(item);
    }
}

/// The full generated plan, as persisted and rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPlan {
    /// Diet category label (the intensity the plan was generated for).
    pub category: String,
    pub tdee: f64,
    pub target_calories: f64,
    pub macro_target: MacroPrescription,
    pub meals: Vec<Meal>,
    pub daily_totals: MacroSplit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodEntry {
        FoodEntry {
            id: "oats".to_string(),
            name: "Rolled oats".to_string(),
            category: "grain".to_string(),
            protein_per_100g: 16.9,
            carb_per_100g: 66.3,
            fat_per_100g: 6.9,
            kcal_per_100g: 389.0,
            fiber_per_100g: 10.6,
            energy_density: 3.89,
        }
    }

    #[test]
    fn test_item_from_food() {
        let item = MealItem::from_food(&sample_food(), 50.0);
        assert_eq!(item.food_id, "oats");
        assert!((item.carb_g - 33.15).abs() < 1e-9);
        assert!((item.kcal - 194.5).abs() < 1e-9);
    }

    #[test]
    fn test_push_item_updates_totals() {
        let mut meal = Meal::new(MealSlot::Breakfast, MacroSplit::default());
        meal.push_item(MealItem::from_food(&sample_food(), 100.0));
        meal.push_item(MealItem::from_food(&sample_food(), 100.0));

        assert_eq!(meal.items.len(), 2);
        assert!((meal.totals.kcal - 778.0).abs() < 1e-9);
        assert!((meal.totals.carb_g - 132.6).abs() < 1e-9);
    }

    #[test]
    fn test_slot_order() {
        assert_eq!(MealSlot::IN_ORDER.len(), 5);
        assert_eq!(MealSlot::IN_ORDER[0], MealSlot::Breakfast);
        assert_eq!(MealSlot::IN_ORDER[4], MealSlot::EveningSnack);
        assert_eq!(MealSlot::AfternoonSnack.label(), "Afternoon snack");
    }
}
