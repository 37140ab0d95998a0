use std::collections::HashMap;

use crate::models::{Category, FoodItem};

/// Read-side lookup over the food catalog.
///
/// Populated once at session start; all queries are by lowercase name.
pub struct FoodCatalog {
    foods: HashMap<String, FoodItem>,
}

impl FoodCatalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        let mut foods = HashMap::new();
        for item in items {
            foods.insert(item.key(), item);
        }
        Self { foods }
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.foods.get(&name.to_lowercase())
    }

    /// All foods in a category, name-sorted. An empty result is valid.
    pub fn list_by_category(&self, category: Category) -> Vec<&FoodItem> {
        let mut items: Vec<&FoodItem> = self
            .foods
            .values()
            .filter(|f| f.category == category)
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Replacement candidates for a line in `category`; falls back to the
    /// whole catalog when the category has no entries.
    pub fn swap_candidates(&self, category: Category) -> Vec<&FoodItem> {
        let by_category = self.list_by_category(category);
        if by_category.is_empty() {
            self.all()
        } else {
            by_category
        }
    }

    /// The synthetic block entries, name-sorted.
    pub fn generics(&self) -> Vec<&FoodItem> {
        let mut items: Vec<&FoodItem> = self.foods.values().filter(|f| f.is_generic()).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// The block entry for a macro group, if seeded.
    pub fn generic_for(&self, category: Category) -> Option<&FoodItem> {
        self.foods
            .values()
            .find(|f| f.is_generic() && f.category == category)
    }

    /// All foods, name-sorted.
    pub fn all(&self) -> Vec<&FoodItem> {
        let mut items: Vec<&FoodItem> = self.foods.values().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodKind;

    fn item(name: &str, category: Category, kind: FoodKind) -> FoodItem {
        FoodItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category,
            kind,
            household_measure: None,
            calories: 100.0,
            protein: 10.0,
            carbs: 10.0,
            fat: 2.0,
        }
    }

    fn sample_catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            item(
                "Arroz cocido",
                Category::Carb,
                FoodKind::Specific {
                    portion_grams: Some(220.0),
                },
            ),
            item(
                "Pechuga de pollo",
                Category::Protein,
                FoodKind::Specific {
                    portion_grams: Some(100.0),
                },
            ),
            item("Bloque proteína", Category::Protein, FoodKind::Generic),
        ])
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = sample_catalog();
        assert!(catalog.get("arroz cocido").is_some());
        assert!(catalog.get("ARROZ COCIDO").is_some());
        assert!(catalog.get("batata").is_none());
    }

    #[test]
    fn test_list_by_category_empty_is_valid() {
        let catalog = sample_catalog();
        assert_eq!(catalog.list_by_category(Category::Carb).len(), 1);
        assert!(catalog.list_by_category(Category::Dairy).is_empty());
    }

    #[test]
    fn test_swap_candidates_falls_back_to_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.swap_candidates(Category::Protein).len(), 2);
        // No dairy entries: the whole catalog is offered instead.
        assert_eq!(catalog.swap_candidates(Category::Dairy).len(), 3);
    }

    #[test]
    fn test_generic_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.generics().len(), 1);
        assert!(catalog.generic_for(Category::Protein).is_some());
        assert!(catalog.generic_for(Category::Carb).is_none());
    }
}
