use std::collections::HashMap;
use std::sync::LazyLock;

/// Household unit weights: food id -> (grams per unit, singular, plural).
static HOUSEHOLD_UNITS: LazyLock<HashMap<&'static str, (f64, &'static str, &'static str)>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("eggs", (60.0, "egg", "eggs"));
        m.insert("whole_grain_bread", (30.0, "slice", "slices"));
        m.insert("rice_cakes", (9.0, "cake", "cakes"));
        m.insert("apple", (180.0, "apple", "apples"));
        m.insert("olive_oil", (13.5, "tbsp", "tbsp"));
        m.insert("peanut_butter", (16.0, "tbsp", "tbsp"));
        m.insert("almonds", (30.0, "handful", "handfuls"));
        m.insert("walnuts", (30.0, "handful", "handfuls"));
        m.insert("greek_yogurt", (170.0, "small tub", "small tubs"));
        m.insert("potato", (170.0, "medium potato", "medium potatoes"));
        m
    });

/// Render grams as a household portion phrase where a unit weight is known,
/// falling back to plain grams.
pub fn to_phrase(food_id: &str, grams: f64) -> String {
    let Some(&(unit_grams, singular, plural)) = HOUSEHOLD_UNITS.get(food_id) else {
        return format!("{grams:.0} g");
    };

    // Nearest half unit; below that, grams read better.
    let count = (grams / unit_grams * 2.0).round() / 2.0;
    if count < 0.5 {
        return format!("{grams:.0} g");
    }

    let noun = if count <= 1.0 { singular } else { plural };
    if count.fract() == 0.0 {
        format!("about {} {}", count as u32, noun)
    } else {
        format!("about {count:.1} {noun}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_units() {
        assert_eq!(to_phrase("eggs", 120.0), "about 2 eggs");
        assert_eq!(to_phrase("whole_grain_bread", 30.0), "about 1 slice");
    }

    #[test]
    fn test_half_units() {
        assert_eq!(to_phrase("apple", 270.0), "about 1.5 apples");
    }

    #[test]
    fn test_unknown_food_falls_back_to_grams() {
        assert_eq!(to_phrase("chicken_breast", 150.0), "150 g");
    }

    #[test]
    fn test_tiny_quantity_falls_back_to_grams() {
        assert_eq!(to_phrase("olive_oil", 2.0), "2 g");
    }
}
