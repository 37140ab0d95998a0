use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exchange::constants::{CARB_PORTION_KCAL, FAT_PORTION_KCAL, PROTEIN_PORTION_KCAL};
use crate::models::{Category, FoodItem, FoodKind};

/// Catalog row as stored by the backend.
///
/// For generic block entries the `*_per_100g` fields hold per-portion
/// values; the convention travels with the data and is resolved into
/// `FoodKind` when records become `FoodItem`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub portion_grams: Option<f64>,

    #[serde(default)]
    pub household_measure: Option<String>,

    pub calories_per_100g: f64,

    #[serde(default)]
    pub protein_per_100g: f64,

    #[serde(default)]
    pub carbs_per_100g: f64,

    #[serde(default)]
    pub fat_per_100g: f64,
}

impl From<FoodRecord> for FoodItem {
    fn from(record: FoodRecord) -> Self {
        let kind = if FoodItem::name_is_generic(&record.name) {
            FoodKind::Generic
        } else {
            FoodKind::Specific {
                portion_grams: record.portion_grams,
            }
        };

        FoodItem {
            id: record.id,
            name: record.name,
            category: Category::normalize(record.category.as_deref().unwrap_or("")),
            kind,
            household_measure: record.household_measure,
            calories: record.calories_per_100g,
            protein: record.protein_per_100g,
            carbs: record.carbs_per_100g,
            fat: record.fat_per_100g,
        }
    }
}

impl From<&FoodItem> for FoodRecord {
    fn from(item: &FoodItem) -> Self {
        let portion_grams = match item.kind {
            FoodKind::Specific { portion_grams } => portion_grams,
            FoodKind::Generic => None,
        };

        FoodRecord {
            id: item.id.clone(),
            name: item.name.clone(),
            category: Some(item.category.label().to_string()),
            portion_grams,
            household_measure: item.household_measure.clone(),
            calories_per_100g: item.calories,
            protein_per_100g: item.protein,
            carbs_per_100g: item.carbs,
            fat_per_100g: item.fat,
        }
    }
}

/// Load the catalog from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<FoodRecord> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, FoodItem> = HashMap::new();
    for record in records {
        let item = FoodItem::from(record);
        seen.insert(item.key(), item);
    }

    Ok(seen.into_values().collect())
}

/// Save the catalog to a JSON file.
///
/// Deduplicates by lowercase name before saving.
pub fn save_catalog<P: AsRef<Path>>(path: P, items: &[FoodItem]) -> Result<()> {
    let mut seen: HashMap<String, &FoodItem> = HashMap::new();
    for item in items {
        seen.insert(item.key(), item);
    }

    let mut deduped: Vec<&FoodItem> = seen.into_values().collect();
    deduped.sort_by_key(|i| i.key());

    let records: Vec<FoodRecord> = deduped.into_iter().map(FoodRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Import catalog rows from a CSV export (same columns as the JSON
/// records).
pub fn import_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    for record in reader.deserialize() {
        let record: FoodRecord = record?;
        items.push(FoodItem::from(record));
    }
    Ok(items)
}

/// Rewrite the three generic block entries.
///
/// Any existing generic rows are dropped and replaced with blocks anchored
/// at 150/200/100 kcal per portion for protein/carb/fat; gram macros follow
/// the Atwater factors (4/4/9) so the anchors stay exact.
pub fn seed_generic_blocks(items: &mut Vec<FoodItem>) {
    items.retain(|f| !f.is_generic());

    items.push(generic_block(
        "bloque-proteina",
        "Bloque proteína",
        Category::Protein,
        PROTEIN_PORTION_KCAL,
        PROTEIN_PORTION_KCAL / 4.0,
        0.0,
        0.0,
    ));
    items.push(generic_block(
        "bloque-carbohidrato",
        "Bloque carbohidrato",
        Category::Carb,
        CARB_PORTION_KCAL,
        0.0,
        CARB_PORTION_KCAL / 4.0,
        0.0,
    ));
    items.push(generic_block(
        "bloque-grasa",
        "Bloque grasa",
        Category::Fat,
        FAT_PORTION_KCAL,
        0.0,
        0.0,
        (FAT_PORTION_KCAL / 9.0 * 10.0).round() / 10.0,
    ));
}

fn generic_block(
    id: &str,
    name: &str,
    category: Category,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        kind: FoodKind::Generic,
        household_measure: Some("1 porción".to_string()),
        calories,
        protein,
        carbs,
        fat,
    }
}
