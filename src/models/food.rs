use serde::{Deserialize, Serialize};

use crate::exchange::constants::GENERIC_MARKER;

/// Closed food-group set used for plan sections and swap filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Carb,
    Fat,
    Vegetable,
    Dairy,
    Other,
}

impl Category {
    /// Map a free-text category string onto the closed set.
    ///
    /// Substring matching, checked in order: "carb", "prot",
    /// "gras"/"fat"/"lipid", "frut" (fruit is grouped with carbs),
    /// "veg"/"verd"/"hortaliz", "lact"/"dairy". Anything else is `Other`.
    pub fn normalize(raw: &str) -> Self {
        let s = raw.to_lowercase();
        if s.contains("carb") {
            Category::Carb
        } else if s.contains("prot") {
            Category::Protein
        } else if s.contains("gras") || s.contains("fat") || s.contains("lipid") {
            Category::Fat
        } else if s.contains("frut") {
            Category::Carb
        } else if s.contains("veg") || s.contains("verd") || s.contains("hortaliz") {
            Category::Vegetable
        } else if s.contains("lact") || s.contains("dairy") {
            Category::Dairy
        } else {
            Category::Other
        }
    }

    /// Groups that anchor the portion system; only these set the
    /// category context while scanning a plan.
    pub fn is_macro_group(&self) -> bool {
        matches!(self, Category::Protein | Category::Carb | Category::Fat)
    }

    /// Display label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Carb => "carb",
            Category::Fat => "fat",
            Category::Vegetable => "vegetable",
            Category::Dairy => "dairy",
            Category::Other => "other",
        }
    }
}

/// How a food's quantity is interpreted.
///
/// Generic block entries use quantity as a direct portion multiplier and
/// store their macros per portion; specific foods use grams against a
/// per-100g density. Resolved once at catalog load, never re-derived from
/// the name at call sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodKind {
    /// Named ingredient; `portion_grams` is the weight of one standard
    /// portion when known.
    Specific { portion_grams: Option<f64> },

    /// Synthetic block entry ("bloque ..."); one portion per quantity unit.
    Generic,
}

/// A catalog food with macro densities and portion definition.
///
/// For `Specific` foods the macro fields are per 100 g; for `Generic`
/// blocks they are per one portion.
#[derive(Debug, Clone)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub kind: FoodKind,

    /// Human-readable serving description (e.g. "1 taza").
    pub household_measure: Option<String>,

    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodItem {
    /// True for synthetic block entries.
    #[inline]
    pub fn is_generic(&self) -> bool {
        matches!(self.kind, FoodKind::Generic)
    }

    /// Standard portion weight in grams, if defined.
    ///
    /// Zero and negative values count as unknown.
    pub fn portion_grams(&self) -> Option<f64> {
        match self.kind {
            FoodKind::Specific { portion_grams } => portion_grams.filter(|g| *g > 0.0),
            FoodKind::Generic => None,
        }
    }

    /// Whether a name denotes a generic block entry.
    pub fn name_is_generic(name: &str) -> bool {
        name.trim().to_lowercase().starts_with(GENERIC_MARKER)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food(name: &str, kind: FoodKind) -> FoodItem {
        FoodItem {
            id: "f1".to_string(),
            name: name.to_string(),
            category: Category::Carb,
            kind,
            household_measure: None,
            calories: 91.0,
            protein: 2.0,
            carbs: 20.0,
            fat: 0.3,
        }
    }

    #[test]
    fn test_normalize_spanish_labels() {
        assert_eq!(Category::normalize("CARBOHIDRATOS"), Category::Carb);
        assert_eq!(Category::normalize("Proteínas"), Category::Protein);
        assert_eq!(Category::normalize("grasas saludables"), Category::Fat);
        assert_eq!(Category::normalize("Frutas"), Category::Carb);
        assert_eq!(Category::normalize("verduras"), Category::Vegetable);
        assert_eq!(Category::normalize("hortalizas"), Category::Vegetable);
        assert_eq!(Category::normalize("lacteos"), Category::Dairy);
        assert_eq!(Category::normalize("snacks"), Category::Other);
    }

    #[test]
    fn test_macro_groups() {
        assert!(Category::Protein.is_macro_group());
        assert!(Category::Carb.is_macro_group());
        assert!(Category::Fat.is_macro_group());
        assert!(!Category::Vegetable.is_macro_group());
        assert!(!Category::Dairy.is_macro_group());
        assert!(!Category::Other.is_macro_group());
    }

    #[test]
    fn test_generic_name_marker() {
        assert!(FoodItem::name_is_generic("Bloque proteína"));
        assert!(FoodItem::name_is_generic("  BLOQUE carbohidrato"));
        assert!(!FoodItem::name_is_generic("Arroz cocido"));
    }

    #[test]
    fn test_portion_grams_zero_is_unknown() {
        let with_grams = sample_food(
            "Arroz cocido",
            FoodKind::Specific {
                portion_grams: Some(220.0),
            },
        );
        assert_eq!(with_grams.portion_grams(), Some(220.0));

        let zeroed = sample_food(
            "Arroz cocido",
            FoodKind::Specific {
                portion_grams: Some(0.0),
            },
        );
        assert_eq!(zeroed.portion_grams(), None);

        let generic = sample_food("Bloque carbohidrato", FoodKind::Generic);
        assert_eq!(generic.portion_grams(), None);
    }

    #[test]
    fn test_equality_case_insensitive() {
        let a = sample_food("Arroz", FoodKind::Generic);
        let mut b = sample_food("ARROZ", FoodKind::Generic);
        b.id = "f2".to_string();
        assert_eq!(a, b);
    }
}
