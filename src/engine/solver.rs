use crate::catalog::FoodCatalog;
use crate::engine::constants::*;
use crate::engine::templates::{FoodRole, MealTemplate};
use crate::error::{CoachError, Result};
use crate::models::{FoodEntry, MacroSplit, MealItem};

/// Round a gram quantity to the nearest portion step.
fn portion(grams: f64) -> f64 {
    (grams / PORTION_STEP_G).round() * PORTION_STEP_G
}

/// A zero in the role's per-100g figure would divide the portion by zero;
/// that is a template defect and must not be skipped silently.
fn role_food<'a>(
    catalog: &'a FoodCatalog,
    template: &MealTemplate,
    role: FoodRole,
) -> Result<&'a FoodEntry> {
    let food = catalog.get(template.primary(role)?)?;
    if role.relevant_per_100g(food) <= 0.0 {
        return Err(CoachError::DegenerateFood {
            food: food.name.clone(),
            role: role.label().to_string(),
        });
    }
    Ok(food)
}

/// Greedily pick food quantities for one meal's sub-targets.
///
/// Order-dependent by design: the protein source is sized first, then a
/// calorie-driven volume vegetable, and only the macros still missing decide
/// whether carbohydrate and fat items are added. Items report the macros
/// their grams actually supply, so a meal can over- or undershoot its
/// sub-targets; the plan validator deals with the drift.
pub fn solve(
    targets: &MacroSplit,
    template: &MealTemplate,
    catalog: &FoodCatalog,
) -> Result<Vec<MealItem>> {
    let mut items = Vec::with_capacity(4);

    // Protein anchor, always present.
    let protein_food = role_food(catalog, template, FoodRole::Protein)?;
    let protein_grams = portion(targets.protein_g * 100.0 / protein_food.protein_per_100g);
    items.push(MealItem::from_food(protein_food, protein_grams));

    // Volume vegetable, always present: sized to cover a share of the meal's
    // calories, with a 100 g floor for satiety.
    let veg_food = role_food(catalog, template, FoodRole::Vegetable)?;
    let veg_grams = (targets.kcal * VEGETABLE_KCAL_SHARE / veg_food.kcal_per_100g * 100.0)
        .round()
        .max(VEGETABLE_MIN_G);
    items.push(MealItem::from_food(veg_food, veg_grams));

    let mut supplied = MacroSplit::default();
    for item in &items {
        supplied.add(&item.macros());
    }
    let remaining_carb = (targets.carb_g - supplied.carb_g).max(0.0);
    let remaining_fat = (targets.fat_g - supplied.fat_g).max(0.0);

    if remaining_carb > CARB_ITEM_THRESHOLD_G {
        let carb_food = role_food(catalog, template, FoodRole::Carbohydrate)?;
        let carb_grams = portion(remaining_carb * 100.0 / carb_food.carb_per_100g);
        items.push(MealItem::from_food(carb_food, carb_grams));
    }

    if remaining_fat > FAT_ITEM_THRESHOLD_G {
        let fat_food = role_food(catalog, template, FoodRole::Fat)?;
        let fat_grams =
            portion(remaining_fat * 100.0 / fat_food.fat_per_100g).max(FAT_ITEM_MIN_G);
        items.push(MealItem::from_food(fat_food, fat_grams));
    }

    Ok(items)
}
