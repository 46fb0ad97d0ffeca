pub mod food;
pub mod plan;

pub use food::FoodEntry;
pub use plan::{
    DietIntensity, MacroPrescription, MacroSplit, Meal, MealItem, MealSlot, MenuPlan,
};
