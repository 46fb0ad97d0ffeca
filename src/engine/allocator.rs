use crate::engine::constants::*;
use crate::error::{CoachError, Result};
use crate::models::{DietIntensity, MacroPrescription};

/// Turn an energy budget and body composition into a bounded macro prescription.
///
/// Priority is fixed: protein is sized first from lean mass, fat gets a floor,
/// and carbohydrate takes the remainder. When the carbohydrate band forces an
/// adjustment, fat gives way first; protein only absorbs overflow that fat
/// cannot take. Reordering these steps changes outputs for edge-case inputs.
pub fn allocate(
    tdee: f64,
    target_calories: f64,
    body_weight_kg: f64,
    body_fat_percent: f64,
    intensity: DietIntensity,
) -> Result<MacroPrescription> {
    for (label, value) in [
        ("tdee", tdee),
        ("target calories", target_calories),
        ("body weight", body_weight_kg),
        ("body fat percent", body_fat_percent),
    ] {
        if !value.is_finite() {
            return Err(CoachError::InvalidInput(format!(
                "{label} must be finite, got {value}"
            )));
        }
    }
    if target_calories <= 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "target calories must be positive, got {target_calories}"
        )));
    }

    let lbm = body_weight_kg * (1.0 - body_fat_percent / 100.0);

    // Protein from lean mass, clamped into its calorie band.
    let mut protein_cal = lbm * protein_coefficient(intensity) * KCAL_PER_G_PROTEIN;
    protein_cal = protein_cal.clamp(
        PROTEIN_PCT_MIN * target_calories,
        PROTEIN_PCT_MAX * target_calories,
    );

    // Fat floor: the larger of 0.6 g/kg lean mass and 20% of the budget.
    let fat_floor_g =
        (lbm * FAT_G_PER_KG_LBM).max(FAT_PCT_FLOOR * target_calories / KCAL_PER_G_FAT);
    let mut fat_cal = (fat_floor_g * KCAL_PER_G_FAT).min(FAT_PCT_MAX * target_calories);

    // Carbohydrate takes the remainder, then gets pulled into its band.
    let mut carb_cal = target_calories - protein_cal - fat_cal;

    let carb_floor = CARB_PCT_MIN * target_calories;
    let carb_ceiling = CARB_PCT_MAX * target_calories;

    if carb_cal < carb_floor {
        // Fat gives way; protein stays untouched.
        fat_cal -= carb_floor - carb_cal;
        carb_cal = carb_floor;
    } else if carb_cal > carb_ceiling {
        let freed = carb_cal - carb_ceiling;
        carb_cal = carb_ceiling;

        let fat_headroom = FAT_PCT_MAX * target_calories - fat_cal;
        let absorbed = freed.min(fat_headroom);
        fat_cal += absorbed;
        // Whatever fat cannot take lands on protein.
        protein_cal += freed - absorbed;
    }

    let prescription = MacroPrescription {
        calories: target_calories,
        protein_g: (protein_cal / KCAL_PER_G_PROTEIN).round(),
        carb_g: (carb_cal / KCAL_PER_G_CARB).round(),
        fat_g: (fat_cal / KCAL_PER_G_FAT).round(),
        protein_percent: (protein_cal / target_calories * 100.0).round(),
        carb_percent: (carb_cal / target_calories * 100.0).round(),
        fat_percent: (fat_cal / target_calories * 100.0).round(),
    };

    ensure_finite(&prescription)?;
    Ok(prescription)
}

fn ensure_finite(prescription: &MacroPrescription) -> Result<()> {
    let values = [
        prescription.protein_g,
        prescription.carb_g,
        prescription.fat_g,
        prescription.protein_percent,
        prescription.carb_percent,
        prescription.fat_percent,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(CoachError::NonFiniteResult(format!("{prescription:?}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_path_no_clamping() {
        // 70 kg at 25% fat -> 52.5 kg lean. Moderate: 105 g protein (420 kcal,
        // 28%), fat floor 33.33 g (300 kcal, 20%), carbs 195 g (780 kcal, 52%).
        let rx = allocate(2000.0, 1500.0, 70.0, 25.0, DietIntensity::Moderate).unwrap();

        assert_eq!(rx.protein_g, 105.0);
        assert_eq!(rx.protein_percent, 28.0);
        assert_eq!(rx.fat_g, 33.0);
        assert_eq!(rx.fat_percent, 20.0);
        assert_eq!(rx.carb_g, 195.0);
        assert_eq!(rx.carb_percent, 52.0);
    }

    #[test]
    fn test_carb_floor_reduces_fat_only() {
        // 120 kg at 10% fat -> 108 kg lean. Restrictive protein hits the 35%
        // cap (700 kcal). Raw fat 583.2 kcal leaves carbs at 716.8 kcal, below
        // the 45% floor (900); the 183.2 kcal shortfall comes out of fat.
        let rx = allocate(3000.0, 2000.0, 120.0, 10.0, DietIntensity::Restrictive).unwrap();

        assert_eq!(rx.protein_percent, 35.0);
        assert_eq!(rx.protein_g, 175.0);
        assert_eq!(rx.carb_percent, 45.0);
        assert_eq!(rx.carb_g, 225.0);
        // 583.2 - 183.2 = 400 kcal of fat.
        assert_eq!(rx.fat_percent, 20.0);
        assert_eq!(rx.fat_g, 44.0);
    }

    #[test]
    fn test_carb_ceiling_returns_calories_to_fat() {
        // 40 kg at 50% fat -> 20 kg lean. Protein clamps up to the 10% floor
        // (200 kcal), fat floor is 20% (400 kcal), so raw carbs land at 70%.
        // The 100 kcal over the 65% ceiling goes back to fat.
        let rx = allocate(2500.0, 2000.0, 40.0, 50.0, DietIntensity::Gentle).unwrap();

        assert_eq!(rx.protein_percent, 10.0);
        assert_eq!(rx.carb_percent, 65.0);
        assert_eq!(rx.carb_g, 325.0);
        assert_eq!(rx.fat_percent, 25.0);
        assert_eq!(rx.fat_g, 56.0);
    }

    #[test]
    fn test_bounds_hold_across_input_grid() {
        for weight in [45.0, 70.0, 95.0, 130.0, 160.0] {
            for body_fat in [5.0, 22.0, 38.0, 55.0] {
                for target in [1200.0, 1700.0, 2400.0, 3500.0] {
                    for intensity in DietIntensity::ALL {
                        let rx = allocate(target + 400.0, target, weight, body_fat, intensity)
                            .unwrap();

                        assert!(
                            (10.0..=35.0).contains(&rx.protein_percent),
                            "protein {}% out of band for w={weight} bf={body_fat} t={target}",
                            rx.protein_percent
                        );
                        assert!(
                            (45.0..=65.0).contains(&rx.carb_percent),
                            "carb {}% out of band for w={weight} bf={body_fat} t={target}",
                            rx.carb_percent
                        );
                        assert!(
                            rx.fat_percent <= 35.0,
                            "fat {}% above cap for w={weight} bf={body_fat} t={target}",
                            rx.fat_percent
                        );
                        assert!(rx.protein_g >= 0.0 && rx.carb_g >= 0.0 && rx.fat_g >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_intensity_orders_protein() {
        let gentle = allocate(2500.0, 2200.0, 80.0, 20.0, DietIntensity::Gentle).unwrap();
        let moderate = allocate(2500.0, 2200.0, 80.0, 20.0, DietIntensity::Moderate).unwrap();
        let restrictive =
            allocate(2500.0, 2200.0, 80.0, 20.0, DietIntensity::Restrictive).unwrap();

        assert!(restrictive.protein_g > moderate.protein_g);
        assert!(moderate.protein_g > gentle.protein_g);
    }

    #[test]
    fn test_idempotent() {
        let a = allocate(2000.0, 1500.0, 70.0, 25.0, DietIntensity::Moderate).unwrap();
        let b = allocate(2000.0, 1500.0, 70.0, 25.0, DietIntensity::Moderate).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        assert!(allocate(f64::NAN, 1500.0, 70.0, 25.0, DietIntensity::Moderate).is_err());
        assert!(allocate(2000.0, f64::INFINITY, 70.0, 25.0, DietIntensity::Moderate).is_err());
        assert!(allocate(2000.0, 1500.0, f64::NAN, 25.0, DietIntensity::Moderate).is_err());
        assert!(
            allocate(2000.0, 1500.0, 70.0, f64::NEG_INFINITY, DietIntensity::Moderate).is_err()
        );
    }

    #[test]
    fn test_zero_target_rejected() {
        assert!(allocate(2000.0, 0.0, 70.0, 25.0, DietIntensity::Moderate).is_err());
    }
}
