use crate::interface::measures::to_phrase;
use crate::models::{FoodEntry, MenuPlan};

/// Display a generated plan: prescription, each meal's items, daily summary.
pub fn display_menu_plan(plan: &MenuPlan, warnings: &[String]) {
    let rx = &plan.macro_target;

    println!();
    println!("=== Daily Plan ({}) ===", plan.category);
    println!();
    println!(
        "TDEE {:.0} kcal, target {:.0} kcal",
        plan.tdee, plan.target_calories
    );
    println!(
        "Prescription: P {:.0} g ({:.0}%) | C {:.0} g ({:.0}%) | F {:.0} g ({:.0}%)",
        rx.protein_g,
        rx.protein_percent,
        rx.carb_g,
        rx.carb_percent,
        rx.fat_g,
        rx.fat_percent
    );

    let max_name_len = plan
        .meals
        .iter()
        .flat_map(|m| m.items.iter())
        .map(|i| i.food_name.len())
        .max()
        .unwrap_or(10);

    for meal in &plan.meals {
        println!();
        println!(
            "--- {} (target {:.0} kcal) ---",
            meal.slot.label(),
            meal.targets.kcal
        );

        for item in &meal.items {
            println!(
                "  {:<width$} {:>5.0} g ({:<18}) {:>4.0} kcal | P {:>4.1} C {:>5.1} F {:>4.1}",
                item.food_name,
                item.grams,
                to_phrase(&item.food_id, item.grams),
                item.kcal,
                item.protein_g,
                item.carb_g,
                item.fat_g,
                width = max_name_len
            );
        }

        println!(
            "  {:<width$} {:>13} {:>4.0} kcal | P {:>4.1} C {:>5.1} F {:>4.1}",
            "total",
            "",
            meal.totals.kcal,
            meal.totals.protein_g,
            meal.totals.carb_g,
            meal.totals.fat_g,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!(
        "Planned:    {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        plan.daily_totals.kcal,
        plan.daily_totals.protein_g,
        plan.daily_totals.carb_g,
        plan.daily_totals.fat_g
    );
    println!(
        "Prescribed: {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        rx.calories, rx.protein_g, rx.carb_g, rx.fat_g
    );

    for warning in warnings {
        println!("  warning: {}", warning);
    }
    println!();
}

/// Display the catalog as a simple list.
pub fn display_food_list(foods: &[&FoodEntry]) {
    if foods.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Food catalog ({} items) ===", foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  {:<width$} [{:<9}] {:>4.0} kcal | P {:>4.1} C {:>5.1} F {:>5.1} | fiber {:>4.1}",
            food.name,
            food.category,
            food.kcal_per_100g,
            food.protein_per_100g,
            food.carb_per_100g,
            food.fat_per_100g,
            food.fiber_per_100g,
            width = max_name_len
        );
    }

    println!();
}
