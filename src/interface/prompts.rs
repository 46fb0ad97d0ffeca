use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::FoodCatalog;
use crate::engine::templates::{FoodRole, MealTemplate};
use crate::engine::PlanRequest;
use crate::error::{CoachError, Result};
use crate::models::{DietIntensity, FoodEntry};

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CoachError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for body weight in kg.
pub fn prompt_body_weight() -> Result<f64> {
    let weight = prompt_number("Body weight (kg)", "70")?;
    if !(30.0..=300.0).contains(&weight) {
        return Err(CoachError::InvalidInput(
            "Body weight must be between 30 and 300 kg".to_string(),
        ));
    }
    Ok(weight)
}

/// Prompt for body fat percent.
pub fn prompt_body_fat() -> Result<f64> {
    let body_fat = prompt_number("Body fat (%)", "25")?;
    if !(2.0..=70.0).contains(&body_fat) {
        return Err(CoachError::InvalidInput(
            "Body fat must be between 2 and 70 percent".to_string(),
        ));
    }
    Ok(body_fat)
}

/// Prompt for total daily energy expenditure.
pub fn prompt_tdee() -> Result<f64> {
    let tdee = prompt_number("Daily energy expenditure, TDEE (kcal)", "2200")?;
    if tdee <= 0.0 {
        return Err(CoachError::InvalidInput(
            "TDEE must be positive".to_string(),
        ));
    }
    Ok(tdee)
}

/// Prompt for target calories, defaulting to a moderate deficit off the TDEE.
pub fn prompt_target_calories(tdee: f64) -> Result<f64> {
    let default = (tdee - 500.0).max(1200.0);
    let target = prompt_number("Target calories (kcal)", &format!("{default:.0}"))?;
    if target <= 0.0 {
        return Err(CoachError::InvalidInput(
            "Target calories must be positive".to_string(),
        ));
    }
    Ok(target)
}

/// Prompt for the diet intensity.
pub fn prompt_intensity() -> Result<DietIntensity> {
    let options: Vec<&str> = DietIntensity::ALL.iter().map(|i| i.label()).collect();

    let selection = Select::new()
        .with_prompt("Diet intensity")
        .items(&options)
        .default(1) // moderate
        .interact()?;

    Ok(DietIntensity::ALL[selection])
}

/// Collect all numeric inputs and the intensity for one plan generation.
pub fn collect_plan_request() -> Result<PlanRequest> {
    let body_weight_kg = prompt_body_weight()?;
    let body_fat_percent = prompt_body_fat()?;
    let tdee = prompt_tdee()?;
    let target_calories = prompt_target_calories(tdee)?;
    let intensity = prompt_intensity()?;

    Ok(PlanRequest {
        tdee,
        target_calories,
        body_weight_kg,
        body_fat_percent,
        intensity,
    })
}

/// Resolve a typed food name against the catalog: exact match first, then
/// fuzzy candidates the user confirms or picks from.
fn resolve_food<'a>(catalog: &'a FoodCatalog, input: &str) -> Result<Option<&'a FoodEntry>> {
    if let Some(food) = catalog.find_by_name(input) {
        return Ok(Some(food));
    }

    let mut candidates: Vec<(&FoodEntry, f64)> = catalog
        .sorted_by_name()
        .into_iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(food));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(f, _)| f.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

/// Let the user promote preferred foods to the front of the template
/// candidate lists. Only foods that already appear as candidates can move.
pub fn prompt_food_preferences(
    catalog: &FoodCatalog,
    templates: &mut [MealTemplate],
) -> Result<()> {
    const ROLES: [FoodRole; 4] = [
        FoodRole::Protein,
        FoodRole::Vegetable,
        FoodRole::Carbohydrate,
        FoodRole::Fat,
    ];

    loop {
        let input: String = Input::new()
            .with_prompt("Prefer a food in your meals (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(food) = resolve_food(catalog, input)? else {
            continue;
        };

        let mut promoted = 0;
        for template in templates.iter_mut() {
            for role in ROLES {
                if template.prefer(role, &food.id) {
                    promoted += 1;
                }
            }
        }

        if promoted > 0 {
            println!("Preferring {} in {} meal(s)", food.name, promoted);
        } else {
            println!(
                "{} is not a template candidate; it stays available in the catalog only",
                food.name
            );
        }
    }

    Ok(())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
