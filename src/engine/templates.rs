use crate::catalog::FoodCatalog;
use crate::error::{CoachError, Result};
use crate::models::MealSlot;

/// The four nutritional roles a template food can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodRole {
    Protein,
    Vegetable,
    Carbohydrate,
    Fat,
}

impl FoodRole {
    pub fn label(self) -> &'static str {
        match self {
            FoodRole::Protein => "protein",
            FoodRole::Vegetable => "vegetable",
            FoodRole::Carbohydrate => "carbohydrate",
            FoodRole::Fat => "fat",
        }
    }

    /// The per-100g figure the solver divides by for this role.
    ///
    /// The vegetable portion is sized by calories, not a macro.
    pub fn relevant_per_100g(self, food: &crate::models::FoodEntry) -> f64 {
        match self {
            FoodRole::Protein => food.protein_per_100g,
            FoodRole::Vegetable => food.kcal_per_100g,
            FoodRole::Carbohydrate => food.carb_per_100g,
            FoodRole::Fat => food.fat_per_100g,
        }
    }
}

/// Per-slot candidate foods, grouped by role. Static configuration, not user
/// data; the first id in each list is the primary pick.
#[derive(Debug, Clone)]
pub struct MealTemplate {
    pub slot: MealSlot,
    pub protein: Vec<String>,
    pub vegetable: Vec<String>,
    pub carbohydrate: Vec<String>,
    pub fat: Vec<String>,
}

impl MealTemplate {
    pub fn candidates(&self, role: FoodRole) -> &[String] {
        match role {
            FoodRole::Protein => &self.protein,
            FoodRole::Vegetable => &self.vegetable,
            FoodRole::Carbohydrate => &self.carbohydrate,
            FoodRole::Fat => &self.fat,
        }
    }

    /// The primary food id for a role. An empty candidate list is a
    /// configuration defect.
    pub fn primary(&self, role: FoodRole) -> Result<&str> {
        self.candidates(role)
            .first()
            .map(String::as_str)
            .ok_or_else(|| {
                CoachError::InvalidInput(format!(
                    "template for {} has no {} candidates",
                    self.slot.label(),
                    role.label()
                ))
            })
    }

    /// Move `food_id` to the front of its role list, if it is a candidate.
    /// Returns whether anything changed.
    pub fn prefer(&mut self, role: FoodRole, food_id: &str) -> bool {
        let list = match role {
            FoodRole::Protein => &mut self.protein,
            FoodRole::Vegetable => &mut self.vegetable,
            FoodRole::Carbohydrate => &mut self.carbohydrate,
            FoodRole::Fat => &mut self.fat,
        };
        match list.iter().position(|id| id == food_id) {
            Some(0) => false,
            Some(pos) => {
                let id = list.remove(pos);
                list.insert(0, id);
                true
            }
            None => false,
        }
    }
}

fn template(
    slot: MealSlot,
    protein: &[&str],
    vegetable: &[&str],
    carbohydrate: &[&str],
    fat: &[&str],
) -> MealTemplate {
    let owned = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect();
    MealTemplate {
        slot,
        protein: owned(protein),
        vegetable: owned(vegetable),
        carbohydrate: owned(carbohydrate),
        fat: owned(fat),
    }
}

/// The built-in meal templates, one per slot, in serving order.
pub fn default_templates() -> Vec<MealTemplate> {
    vec![
        template(
            MealSlot::Breakfast,
            &["eggs", "greek_yogurt"],
            &["spinach", "tomato"],
            &["oats", "whole_grain_bread"],
            &["peanut_butter", "almonds"],
        ),
        template(
            MealSlot::Lunch,
            &["chicken_breast", "tuna"],
            &["broccoli", "mixed_salad"],
            &["brown_rice", "potato"],
            &["olive_oil", "avocado"],
        ),
        template(
            MealSlot::AfternoonSnack,
            &["greek_yogurt", "cottage_cheese"],
            &["cucumber", "carrot"],
            &["apple", "rice_cakes"],
            &["almonds", "walnuts"],
        ),
        template(
            MealSlot::Dinner,
            &["salmon", "lean_beef"],
            &["green_beans", "broccoli"],
            &["potato", "quinoa"],
            &["olive_oil", "avocado"],
        ),
        template(
            MealSlot::EveningSnack,
            &["cottage_cheese", "greek_yogurt"],
            &["carrot", "cucumber"],
            &["rice_cakes", "apple"],
            &["walnuts", "almonds"],
        ),
    ]
}

/// Template-authoring-time validation.
///
/// Every candidate id must exist in the catalog, and every candidate must
/// carry a non-zero value for its role, or the solver would divide by zero.
pub fn validate_templates(templates: &[MealTemplate], catalog: &FoodCatalog) -> Result<()> {
    const ROLES: [FoodRole; 4] = [
        FoodRole::Protein,
        FoodRole::Vegetable,
        FoodRole::Carbohydrate,
        FoodRole::Fat,
    ];

    for tpl in templates {
        for role in ROLES {
            tpl.primary(role)?;
            for id in tpl.candidates(role) {
                let food = catalog.get(id)?;
                if role.relevant_per_100g(food) <= 0.0 {
                    return Err(CoachError::DegenerateFood {
                        food: food.name.clone(),
                        role: role.label().to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_foods, FoodCatalog};
    use crate::models::FoodEntry;

    fn food(id: &str, protein: f64, carb: f64, fat: f64, kcal: f64) -> FoodEntry {
        FoodEntry {
            id: id.to_string(),
            name: id.to_string(),
            category: "test".to_string(),
            protein_per_100g: protein,
            carb_per_100g: carb,
            fat_per_100g: fat,
            kcal_per_100g: kcal,
            fiber_per_100g: 0.0,
            energy_density: kcal / 100.0,
        }
    }

    #[test]
    fn test_default_templates_valid_against_builtin_catalog() {
        let catalog = FoodCatalog::new(builtin_foods());
        validate_templates(&default_templates(), &catalog).unwrap();
    }

    #[test]
    fn test_default_templates_cover_all_slots() {
        let templates = default_templates();
        let slots: Vec<MealSlot> = templates.iter().map(|t| t.slot).collect();
        assert_eq!(slots, MealSlot::IN_ORDER.to_vec());
    }

    #[test]
    fn test_validation_rejects_zero_macro_candidate() {
        // Cucumber in the carbohydrate role with no carbs at all.
        let catalog = FoodCatalog::new(vec![
            food("fish", 20.0, 0.0, 5.0, 125.0),
            food("greens", 2.0, 3.0, 0.3, 20.0),
            food("watery_cucumber", 0.5, 0.0, 0.1, 10.0),
            food("oil", 0.0, 0.0, 100.0, 884.0),
        ]);
        let templates = vec![template(
            MealSlot::Lunch,
            &["fish"],
            &["greens"],
            &["watery_cucumber"],
            &["oil"],
        )];

        let err = validate_templates(&templates, &catalog).unwrap_err();
        assert!(matches!(err, CoachError::DegenerateFood { .. }));
    }

    #[test]
    fn test_validation_rejects_unknown_id() {
        let catalog = FoodCatalog::new(vec![food("fish", 20.0, 0.0, 5.0, 125.0)]);
        let templates = vec![template(
            MealSlot::Dinner,
            &["fish"],
            &["long_gone_vegetable"],
            &["fish"],
            &["fish"],
        )];

        let err = validate_templates(&templates, &catalog).unwrap_err();
        assert!(matches!(err, CoachError::FoodNotFound(_)));
    }

    #[test]
    fn test_prefer_moves_candidate_to_front() {
        let mut tpl = template(
            MealSlot::Lunch,
            &["chicken_breast", "tuna"],
            &["broccoli"],
            &["brown_rice"],
            &["olive_oil"],
        );

        assert!(tpl.prefer(FoodRole::Protein, "tuna"));
        assert_eq!(tpl.primary(FoodRole::Protein).unwrap(), "tuna");

        // Already primary or not a candidate: no change.
        assert!(!tpl.prefer(FoodRole::Protein, "tuna"));
        assert!(!tpl.prefer(FoodRole::Protein, "tofu"));
    }
}
