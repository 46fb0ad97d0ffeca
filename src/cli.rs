use clap::{Parser, Subcommand};

/// NutriCoach — prescribes daily macros and assembles meal plans that hit them.
#[derive(Parser, Debug)]
#[command(name = "nutri_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_catalog.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a daily meal plan from body metrics.
    Plan {
        /// Write the generated plan to this JSON file without asking.
        #[arg(long)]
        save: Option<String>,
    },

    /// List the food catalog.
    Catalog,

    /// Import food entries from a CSV file into the catalog.
    Import {
        /// CSV file with per-100g nutrition columns.
        csv: String,
    },

    /// Check the meal templates against the catalog.
    CheckTemplates,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { save: None }
    }
}
