use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodEntry;

/// Load catalog entries from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<FoodEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

/// Save catalog entries to a JSON file, sorted by id for stable diffs.
pub fn save_catalog<P: AsRef<Path>>(path: P, entries: &[FoodEntry]) -> Result<()> {
    let mut sorted: Vec<&FoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    let json = serde_json::to_string_pretty(&sorted)?;
    fs::write(path, json)?;
    Ok(())
}

/// Import catalog entries from a CSV file.
///
/// Expects a header row matching the `FoodEntry` field names
/// (id, name, category, protein_per_100g, ...).
pub fn import_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodEntry>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: FoodEntry = record?;
        entries.push(entry);
    }
    Ok(entries)
}
