use crate::exchange::constants::*;
use crate::models::{FoodItem, SubstitutionResult, Unit};

/// Macro values for a food at a concrete quantity.
#[derive(Debug, Clone, Default)]
pub struct MacroBreakdown {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroBreakdown {
    /// Display precision: whole kcal, one decimal for the gram macros.
    pub fn rounded(&self) -> MacroBreakdown {
        MacroBreakdown {
            calories: self.calories.round(),
            protein: round1(self.protein),
            carbs: round1(self.carbs),
            fat: round1(self.fat),
        }
    }
}

/// Compute macros for a food at a quantity.
///
/// The quantity semantics are asymmetric: generic blocks take quantity as
/// a direct portion multiplier against per-portion values, specific foods
/// take quantity as grams against per-100g densities.
pub fn macros_for(food: &FoodItem, quantity: f64) -> MacroBreakdown {
    let factor = if food.is_generic() {
        quantity
    } else {
        quantity / 100.0
    };

    MacroBreakdown {
        calories: food.calories * factor,
        protein: food.protein * factor,
        carbs: food.carbs * factor,
        fat: food.fat * factor,
    }
}

/// Portion count represented by an existing plan line.
///
/// A line already denominated in portions keeps its quantity. Otherwise
/// the count comes from the catalog entry: generic foods count portions
/// directly, specific foods divide grams by their standard portion weight.
/// A missing food or unknown portion weight falls back to one portion.
pub fn portion_count(old_food: Option<&FoodItem>, quantity: f64, unit: Unit) -> f64 {
    if unit == Unit::Portions {
        return quantity;
    }

    match old_food {
        Some(food) if food.is_generic() => quantity,
        Some(food) => match food.portion_grams() {
            Some(grams) => quantity / grams,
            None => DEFAULT_PORTION_COUNT,
        },
        None => DEFAULT_PORTION_COUNT,
    }
}

/// Swap a plan line's food for another while preserving its portion count.
///
/// Returns the replacement quantity and the recomputed macros. Quantities
/// that round to zero or come out non-finite are clamped to a safe default
/// (one portion for generic targets, the standard portion weight or 100 g
/// for specific ones) so the serialized output never carries NaN or zero.
pub fn substitute(
    old_food: Option<&FoodItem>,
    old_quantity: f64,
    old_unit: Unit,
    new_food: &FoodItem,
) -> SubstitutionResult {
    let portions = portion_count(old_food, old_quantity, old_unit);

    let (quantity, unit) = if new_food.is_generic() {
        let q = round1(portions);
        let q = if q.is_finite() && q > 0.0 {
            q
        } else {
            DEFAULT_PORTION_COUNT
        };
        (q, Unit::Portions)
    } else {
        match new_food.portion_grams() {
            Some(grams) => {
                let q = (portions * grams).round();
                let q = if q.is_finite() && q > 0.0 { q } else { grams.round() };
                (q, Unit::Grams)
            }
            None => (DEFAULT_SPECIFIC_GRAMS, Unit::Grams),
        }
    };

    let macros = macros_for(new_food, quantity).rounded();

    SubstitutionResult {
        food_name: new_food.name.clone(),
        quantity,
        unit,
        calories: macros.calories,
        protein: macros.protein,
        carbs: macros.carbs,
        fat: macros.fat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FoodKind};

    fn specific(name: &str, grams: Option<f64>, cal: f64, p: f64, c: f64, f: f64) -> FoodItem {
        FoodItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category: Category::Carb,
            kind: FoodKind::Specific {
                portion_grams: grams,
            },
            household_measure: None,
            calories: cal,
            protein: p,
            carbs: c,
            fat: f,
        }
    }

    fn generic(name: &str, cal: f64) -> FoodItem {
        FoodItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category: Category::Carb,
            kind: FoodKind::Generic,
            household_measure: Some("1 porción".to_string()),
            calories: cal,
            protein: 0.0,
            carbs: 50.0,
            fat: 0.0,
        }
    }

    #[test]
    fn test_macros_specific_gram_ratio() {
        let arroz = specific("Arroz cocido", Some(220.0), 91.0, 2.0, 20.0, 0.3);
        let macros = macros_for(&arroz, 220.0);
        assert!((macros.calories - 200.2).abs() < 0.001);
        assert!((macros.protein - 4.4).abs() < 0.001);
    }

    #[test]
    fn test_macros_generic_multiplier() {
        let bloque = generic("Bloque carbohidrato", 200.0);
        let macros = macros_for(&bloque, 1.5);
        assert!((macros.calories - 300.0).abs() < 0.001);
        assert!((macros.carbs - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_portion_count_from_grams() {
        let arroz = specific("Arroz cocido", Some(220.0), 91.0, 2.0, 20.0, 0.3);
        assert!((portion_count(Some(&arroz), 440.0, Unit::Grams) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_portion_count_fallbacks() {
        // Missing food: assume one portion.
        assert_eq!(portion_count(None, 180.0, Unit::Grams), 1.0);

        // Known food without a portion weight: same assumption.
        let sin_porcion = specific("Quinoa", None, 120.0, 4.4, 21.3, 1.9);
        assert_eq!(portion_count(Some(&sin_porcion), 180.0, Unit::Grams), 1.0);

        // Zero portion weight counts as unknown, never divides.
        let cero = specific("Quinoa", Some(0.0), 120.0, 4.4, 21.3, 1.9);
        assert_eq!(portion_count(Some(&cero), 180.0, Unit::Grams), 1.0);
    }

    #[test]
    fn test_portion_count_portion_lines() {
        // A line already in portions keeps its quantity even without a
        // catalog entry behind it.
        assert_eq!(portion_count(None, 2.5, Unit::Portions), 2.5);
    }

    #[test]
    fn test_substitute_specific_to_specific() {
        let a = specific("A", Some(150.0), 130.0, 10.0, 15.0, 2.0);
        let b = specific("B", Some(250.0), 80.0, 3.0, 17.0, 0.5);

        let result = substitute(Some(&a), 150.0, Unit::Grams, &b);
        assert_eq!(result.quantity, 250.0);
        assert_eq!(result.unit, Unit::Grams);
        assert_eq!(result.calories, 200.0);
        assert_eq!(result.protein, 7.5);
    }

    #[test]
    fn test_substitute_arroz_por_papas() {
        let arroz = specific("Arroz cocido", Some(220.0), 91.0, 2.0, 20.0, 0.3);
        let papas = specific("Papas cocidas", Some(265.0), 75.0, 1.7, 17.0, 0.1);

        let result = substitute(Some(&arroz), 220.0, Unit::Grams, &papas);
        assert_eq!(result.quantity, 265.0);
        assert_eq!(result.calories, 199.0); // 265/100*75 = 198.75
    }

    #[test]
    fn test_substitute_specific_to_generic() {
        let pollo = specific("Pechuga de pollo", Some(100.0), 110.0, 23.0, 0.0, 1.5);
        let bloque = generic("Bloque proteína", 150.0);

        // 200 g at 100 g per portion: exactly two portions.
        let result = substitute(Some(&pollo), 200.0, Unit::Grams, &bloque);
        assert_eq!(result.quantity, 2.0);
        assert_eq!(result.unit, Unit::Portions);
        assert_eq!(result.calories, 300.0);
    }

    #[test]
    fn test_substitute_generic_to_generic() {
        let carbo = generic("Bloque carbohidrato", 200.0);
        let result = substitute(Some(&carbo), 1.5, Unit::Portions, &carbo);
        assert_eq!(result.quantity, 1.5);
        assert_eq!(result.calories, 300.0);
    }

    #[test]
    fn test_substitute_missing_old_food() {
        let papas = specific("Papas cocidas", Some(265.0), 75.0, 1.7, 17.0, 0.1);

        // Old food deleted from the catalog: one portion assumed.
        let result = substitute(None, 350.0, Unit::Grams, &papas);
        assert_eq!(result.quantity, 265.0);
        assert_eq!(result.calories, 199.0);
    }

    #[test]
    fn test_substitute_no_portion_weight_defaults_100g() {
        let arroz = specific("Arroz cocido", Some(220.0), 91.0, 2.0, 20.0, 0.3);
        let quinoa = specific("Quinoa", None, 120.0, 4.4, 21.3, 1.9);

        let result = substitute(Some(&arroz), 220.0, Unit::Grams, &quinoa);
        assert_eq!(result.quantity, DEFAULT_SPECIFIC_GRAMS);
        assert_eq!(result.calories, 120.0);
    }

    #[test]
    fn test_substitute_underflow_clamps() {
        let arroz = specific("Arroz cocido", Some(220.0), 91.0, 2.0, 20.0, 0.3);
        let papas = specific("Papas cocidas", Some(265.0), 75.0, 1.7, 17.0, 0.1);
        let bloque = generic("Bloque carbohidrato", 200.0);

        // 1 g of rice rounds to zero portions: clamp to one portion of the
        // generic target.
        let to_generic = substitute(Some(&arroz), 1.0, Unit::Grams, &bloque);
        assert_eq!(to_generic.quantity, 1.0);
        assert_eq!(to_generic.unit, Unit::Portions);

        // Same underflow toward a specific target: clamp to its portion
        // weight.
        let to_specific = substitute(Some(&arroz), 0.0, Unit::Grams, &papas);
        assert_eq!(to_specific.quantity, 265.0);
    }
}
