mod defaults;
mod persistence;
mod store;

pub use defaults::builtin_foods;
pub use persistence::{import_csv, load_catalog, save_catalog};
pub use store::FoodCatalog;
