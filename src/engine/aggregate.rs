use crate::engine::constants::{DEFAULT_KCAL_TOLERANCE, DEFAULT_MACRO_TOLERANCE_G};
use crate::models::{MacroSplit, Meal, MenuPlan};

/// Sum all meals' totals into daily totals. No clamping or correction.
pub fn aggregate(meals: &[Meal]) -> MacroSplit {
    let mut totals = MacroSplit::default();
    for meal in meals {
        totals.add(&meal.totals);
    }
    totals
}

/// Allowed deviation between daily totals and the prescription before the
/// validator starts warning. Tuned by acceptance testing, hence a parameter
/// rather than a fixed rule.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    pub kcal: f64,
    pub grams: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            kcal: DEFAULT_KCAL_TOLERANCE,
            grams: DEFAULT_MACRO_TOLERANCE_G,
        }
    }
}

/// Compare a plan's daily totals against its prescription.
///
/// The greedy solver does not promise the meals sum back to the prescription,
/// so deviations are reported as warnings and never fail the plan.
pub fn validate_plan(plan: &MenuPlan, tolerance: &Tolerance) -> Vec<String> {
    let mut warnings = Vec::new();
    let totals = &plan.daily_totals;
    let target = &plan.macro_target;

    let mut check = |label: &str, actual: f64, expected: f64, band: f64| {
        let delta = actual - expected;
        if delta.abs() > band {
            warnings.push(format!(
                "{label} off target: planned {actual:.0}, prescribed {expected:.0} ({delta:+.0})"
            ));
        }
    };

    check("Calories", totals.kcal, target.calories, tolerance.kcal);
    check("Protein", totals.protein_g, target.protein_g, tolerance.grams);
    check("Carbs", totals.carb_g, target.carb_g, tolerance.grams);
    check("Fat", totals.fat_g, target.fat_g, tolerance.grams);

    warnings
}
