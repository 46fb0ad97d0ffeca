use crate::engine::constants::MEAL_SHARES;
use crate::models::{MacroPrescription, MacroSplit, Meal};

/// Split the daily prescription into the five fixed meals.
///
/// Every sub-target is rounded independently, so the five meals can drift
/// from the daily totals by a few units per macro. The drift is accepted and
/// left to the tolerance-based plan validator; it is never corrected here.
pub fn distribute(prescription: &MacroPrescription) -> Vec<Meal> {
    MEAL_SHARES
        .iter()
        .map(|&(slot, share)| {
            let targets = MacroSplit {
                kcal: (prescription.calories * share).round(),
                protein_g: (prescription.protein_g * share).round(),
                carb_g: (prescription.carb_g * share).round(),
                fat_g: (prescription.fat_g * share).round(),
            };
            Meal::new(slot, targets)
        })
        .collect()
}
