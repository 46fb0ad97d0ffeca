use crate::models::{DietIntensity, MealSlot};

/// Calories per gram of each macro (Atwater factors).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro allocation (AMDR bounds and prescription coefficients)
// ─────────────────────────────────────────────────────────────────────────────

/// Protein bounds as a fraction of target calories.
pub const PROTEIN_PCT_MIN: f64 = 0.10;
pub const PROTEIN_PCT_MAX: f64 = 0.35;

/// Carbohydrate bounds as a fraction of target calories.
pub const CARB_PCT_MIN: f64 = 0.45;
pub const CARB_PCT_MAX: f64 = 0.65;

/// Fat ceiling and energy floor as fractions of target calories.
pub const FAT_PCT_MAX: f64 = 0.35;
pub const FAT_PCT_FLOOR: f64 = 0.20;

/// Minimum fat in grams per kg of lean body mass.
pub const FAT_G_PER_KG_LBM: f64 = 0.6;

/// Protein prescription in g per kg of lean body mass, by diet intensity.
pub const PROTEIN_G_PER_KG_GENTLE: f64 = 1.8;
pub const PROTEIN_G_PER_KG_MODERATE: f64 = 2.0;
pub const PROTEIN_G_PER_KG_RESTRICTIVE: f64 = 2.2;

/// Protein coefficient for an intensity.
pub fn protein_coefficient(intensity: DietIntensity) -> f64 {
    match intensity {
        DietIntensity::Gentle => PROTEIN_G_PER_KG_GENTLE,
        DietIntensity::Moderate => PROTEIN_G_PER_KG_MODERATE,
        DietIntensity::Restrictive => PROTEIN_G_PER_KG_RESTRICTIVE,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Meal distribution
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie share per meal slot, in serving order. Must sum to exactly 1.0.
pub const MEAL_SHARES: [(MealSlot, f64); 5] = [
    (MealSlot::Breakfast, 0.20),
    (MealSlot::Lunch, 0.30),
    (MealSlot::AfternoonSnack, 0.15),
    (MealSlot::Dinner, 0.25),
    (MealSlot::EveningSnack, 0.10),
];

// ─────────────────────────────────────────────────────────────────────────────
// Item solving
// ─────────────────────────────────────────────────────────────────────────────

/// Portion granularity: item grams are rounded to the nearest multiple.
pub const PORTION_STEP_G: f64 = 5.0;

/// Share of a meal's calories covered by the volume vegetable.
pub const VEGETABLE_KCAL_SHARE: f64 = 0.30;

/// Minimum vegetable portion in grams.
pub const VEGETABLE_MIN_G: f64 = 100.0;

/// A carbohydrate item is added only when more than this many grams remain.
pub const CARB_ITEM_THRESHOLD_G: f64 = 5.0;

/// A fat item is added only when more than this many grams remain.
pub const FAT_ITEM_THRESHOLD_G: f64 = 2.0;

/// Minimum fat portion in grams once a fat item is added.
pub const FAT_ITEM_MIN_G: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Plan validation
// ─────────────────────────────────────────────────────────────────────────────

/// Default tolerance when comparing daily totals to the prescription.
/// The greedy solver is expected to drift; these only gate warnings.
pub const DEFAULT_KCAL_TOLERANCE: f64 = 150.0;
pub const DEFAULT_MACRO_TOLERANCE_G: f64 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_shares_sum_to_one() {
        let total: f64 = MEAL_SHARES.iter().map(|&(_, share)| share).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_meal_shares_follow_serving_order() {
        let slots: Vec<MealSlot> = MEAL_SHARES.iter().map(|&(slot, _)| slot).collect();
        assert_eq!(slots, MealSlot::IN_ORDER.to_vec());
    }

    #[test]
    fn test_protein_coefficients_increase_with_intensity() {
        assert!(
            protein_coefficient(DietIntensity::Restrictive)
                > protein_coefficient(DietIntensity::Moderate)
        );
        assert!(
            protein_coefficient(DietIntensity::Moderate)
                > protein_coefficient(DietIntensity::Gentle)
        );
    }
}
