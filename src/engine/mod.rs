pub mod aggregate;
pub mod allocator;
pub mod constants;
pub mod distribute;
pub mod solver;
pub mod templates;

pub use aggregate::{aggregate, validate_plan, Tolerance};
pub use allocator::allocate;
pub use constants::*;
pub use distribute::distribute;
pub use solver::solve;
pub use templates::{default_templates, validate_templates, FoodRole, MealTemplate};

use crate::catalog::FoodCatalog;
use crate::error::{CoachError, Result};
use crate::models::{DietIntensity, MenuPlan};

/// Everything the caller supplies for one plan generation.
#[derive(Debug, Clone, Copy)]
pub struct PlanRequest {
    pub tdee: f64,
    pub target_calories: f64,
    pub body_weight_kg: f64,
    pub body_fat_percent: f64,
    pub intensity: DietIntensity,
}

/// Run the whole pipeline: allocate, distribute, solve each meal, aggregate.
///
/// The catalog is injected read-only; a fresh plan is built on every call and
/// the previous one is simply replaced by the caller.
pub fn generate_menu_plan(
    catalog: &FoodCatalog,
    templates: &[MealTemplate],
    request: &PlanRequest,
) -> Result<MenuPlan> {
    let prescription = allocate(
        request.tdee,
        request.target_calories,
        request.body_weight_kg,
        request.body_fat_percent,
        request.intensity,
    )?;

    let mut meals = distribute(&prescription);
    for meal in &mut meals {
        let template = templates
            .iter()
            .find(|t| t.slot == meal.slot)
            .ok_or_else(|| {
                CoachError::InvalidInput(format!("no template for {}", meal.slot.label()))
            })?;

        for item in solve(&meal.targets, template, catalog)? {
            meal.push_item(item);
        }
    }

    let daily_totals = aggregate(&meals);

    Ok(MenuPlan {
        category: request.intensity.label().to_string(),
        tdee: request.tdee,
        target_calories: request.target_calories,
        macro_target: prescription,
        meals,
        daily_totals,
    })
}
