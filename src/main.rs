use clap::Parser;
use std::fs;
use std::path::Path;

use nutri_coach_rs::catalog::{builtin_foods, import_csv, load_catalog, save_catalog, FoodCatalog};
use nutri_coach_rs::cli::{Cli, Command};
use nutri_coach_rs::engine::{
    default_templates, generate_menu_plan, validate_plan, validate_templates, Tolerance,
};
use nutri_coach_rs::error::Result;
use nutri_coach_rs::interface::{
    collect_plan_request, display_food_list, display_menu_plan, prompt_food_preferences,
    prompt_yes_no,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { save } => cmd_plan(&cli.file, save.as_deref()),
        Command::Catalog => cmd_catalog(&cli.file),
        Command::Import { csv } => cmd_import(&cli.file, &csv),
        Command::CheckTemplates => cmd_check_templates(&cli.file),
    }
}

/// Load the catalog file, falling back to the built-in food set.
fn open_catalog(file_path: &str) -> Result<FoodCatalog> {
    let path = Path::new(file_path);

    if path.exists() {
        let entries = load_catalog(path)?;
        println!("Loaded {} foods from {}", entries.len(), file_path);
        Ok(FoodCatalog::new(entries))
    } else {
        let entries = builtin_foods();
        println!("No catalog file at {}; using built-in foods", file_path);
        Ok(FoodCatalog::new(entries))
    }
}

/// Generate a meal plan from interactively collected body metrics.
fn cmd_plan(file_path: &str, save: Option<&str>) -> Result<()> {
    let catalog = open_catalog(file_path)?;
    let mut templates = default_templates();

    // Catch template/catalog mismatches before prompting the user.
    validate_templates(&templates, &catalog)?;

    println!();
    let request = collect_plan_request()?;
    prompt_food_preferences(&catalog, &mut templates)?;

    let plan = generate_menu_plan(&catalog, &templates, &request)?;
    let warnings = validate_plan(&plan, &Tolerance::default());

    display_menu_plan(&plan, &warnings);

    match save {
        Some(path) => write_plan(path, &plan)?,
        None => {
            if prompt_yes_no("Save plan to meal_plan.json?", false)? {
                write_plan("meal_plan.json", &plan)?;
            }
        }
    }

    Ok(())
}

fn write_plan(path: &str, plan: &nutri_coach_rs::models::MenuPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    println!("Plan saved to {}", path);
    Ok(())
}

/// List the catalog contents.
fn cmd_catalog(file_path: &str) -> Result<()> {
    let catalog = open_catalog(file_path)?;
    display_food_list(&catalog.sorted_by_name());
    Ok(())
}

/// Merge CSV entries into the catalog file.
fn cmd_import(file_path: &str, csv_path: &str) -> Result<()> {
    let mut entries = if Path::new(file_path).exists() {
        load_catalog(file_path)?
    } else {
        builtin_foods()
    };

    let imported = import_csv(csv_path)?;
    let imported_count = imported.len();
    entries.extend(imported);

    // Later entries win on duplicate ids.
    let catalog = FoodCatalog::new(entries);
    save_catalog(file_path, &catalog.to_entries())?;

    println!(
        "Imported {} foods; catalog at {} now has {} entries",
        imported_count,
        file_path,
        catalog.len()
    );
    Ok(())
}

/// Validate the built-in templates against the catalog.
fn cmd_check_templates(file_path: &str) -> Result<()> {
    let catalog = open_catalog(file_path)?;
    validate_templates(&default_templates(), &catalog)?;
    println!("All meal templates check out against the catalog.");
    Ok(())
}
