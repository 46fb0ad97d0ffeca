use crate::models::FoodEntry;

fn entry(
    id: &str,
    name: &str,
    category: &str,
    protein: f64,
    carb: f64,
    fat: f64,
    kcal: f64,
    fiber: f64,
) -> FoodEntry {
    FoodEntry {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        protein_per_100g: protein,
        carb_per_100g: carb,
        fat_per_100g: fat,
        kcal_per_100g: kcal,
        fiber_per_100g: fiber,
        energy_density: kcal / 100.0,
    }
}

/// The built-in food catalog, used when no catalog file exists yet.
///
/// Values are per 100 g; grains and tubers are as cooked.
pub fn builtin_foods() -> Vec<FoodEntry> {
    vec![
        // Protein sources
        entry("chicken_breast", "Chicken breast", "protein", 31.0, 0.0, 3.6, 165.0, 0.0),
        entry("eggs", "Whole eggs", "protein", 13.0, 1.1, 11.0, 155.0, 0.0),
        entry("greek_yogurt", "Greek yogurt", "protein", 10.0, 3.6, 0.4, 59.0, 0.0),
        entry("cottage_cheese", "Cottage cheese", "protein", 11.0, 3.4, 4.3, 98.0, 0.0),
        entry("tuna", "Canned tuna", "protein", 24.0, 0.0, 0.9, 108.0, 0.0),
        entry("salmon", "Salmon fillet", "protein", 20.0, 0.0, 13.0, 208.0, 0.0),
        entry("lean_beef", "Lean beef", "protein", 26.0, 0.0, 15.0, 250.0, 0.0),
        // Vegetables
        entry("spinach", "Spinach", "vegetable", 2.9, 3.6, 0.4, 23.0, 2.2),
        entry("tomato", "Tomato", "vegetable", 0.9, 3.9, 0.2, 18.0, 1.2),
        entry("broccoli", "Broccoli", "vegetable", 2.8, 6.6, 0.4, 34.0, 2.6),
        entry("mixed_salad", "Mixed salad greens", "vegetable", 1.4, 3.3, 0.2, 17.0, 1.8),
        entry("cucumber", "Cucumber", "vegetable", 0.7, 3.6, 0.1, 15.0, 0.5),
        entry("carrot", "Carrot", "vegetable", 0.9, 9.6, 0.2, 41.0, 2.8),
        entry("green_beans", "Green beans", "vegetable", 1.8, 7.0, 0.2, 31.0, 2.7),
        // Carbohydrate sources
        entry("oats", "Rolled oats", "grain", 16.9, 66.3, 6.9, 389.0, 10.6),
        entry("whole_grain_bread", "Whole-grain bread", "grain", 13.0, 41.0, 3.4, 247.0, 7.0),
        entry("brown_rice", "Brown rice", "grain", 2.6, 23.0, 0.9, 111.0, 1.8),
        entry("potato", "Boiled potato", "tuber", 2.0, 17.0, 0.1, 77.0, 2.2),
        entry("quinoa", "Quinoa", "grain", 4.4, 21.3, 1.9, 120.0, 2.8),
        entry("rice_cakes", "Rice cakes", "grain", 7.3, 81.5, 2.8, 387.0, 4.2),
        entry("apple", "Apple", "fruit", 0.3, 13.8, 0.2, 52.0, 2.4),
        // Fat sources
        entry("olive_oil", "Olive oil", "fat", 0.0, 0.0, 100.0, 884.0, 0.0),
        entry("almonds", "Almonds", "fat", 21.2, 21.6, 49.9, 579.0, 12.5),
        entry("walnuts", "Walnuts", "fat", 15.2, 13.7, 65.2, 654.0, 6.7),
        entry("peanut_butter", "Peanut butter", "fat", 25.0, 20.0, 50.0, 588.0, 6.0),
        entry("avocado", "Avocado", "fat", 2.0, 8.5, 14.7, 160.0, 6.7),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_foods_are_valid() {
        let foods = builtin_foods();
        assert!(!foods.is_empty());
        for food in &foods {
            assert!(food.is_valid(), "invalid builtin food: {}", food.id);
            assert!(
                (food.energy_density - food.kcal_per_100g / 100.0).abs() < 1e-9,
                "energy density out of sync for {}",
                food.id
            );
        }
    }

    #[test]
    fn test_builtin_ids_unique() {
        let foods = builtin_foods();
        let mut ids: Vec<&str> = foods.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }
}
