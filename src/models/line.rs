use crate::models::Category;

/// Unit attached to a plan-line quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Grams,
    Milliliters,
    Units,
    /// Dimensionless portion multiplier, used by generic block lines.
    Portions,
}

impl Unit {
    /// Parse a unit token as written in plan text.
    pub fn parse_token(token: &str) -> Option<Unit> {
        match token.trim().trim_end_matches('.').to_lowercase().as_str() {
            "g" | "gr" | "grs" | "gramos" => Some(Unit::Grams),
            "ml" => Some(Unit::Milliliters),
            "ud" | "uds" | "u" | "unidad" | "unidades" | "unit" | "units" => Some(Unit::Units),
            "porcion" | "porciones" | "porción" | "portion" | "portions" => Some(Unit::Portions),
            _ => None,
        }
    }

    /// Label used when writing the unit back into plan text.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
            Unit::Units => "ud",
            Unit::Portions => "porciones",
        }
    }

    /// Whether the label attaches directly to the number ("150g") rather
    /// than standing as a separate word ("2 porciones").
    pub fn attaches(&self) -> bool {
        matches!(self, Unit::Grams | Unit::Milliliters)
    }
}

/// A parsed pipe-delimited food row.
///
/// `cells` keeps the original data cells (trimmed, outer pipes stripped) so
/// positions outside the recognized columns survive a rewrite verbatim.
#[derive(Debug, Clone)]
pub struct FoodRow {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    pub cells: Vec<String>,
}

/// A parsed `- **<qty><unit> <name>**` list item.
#[derive(Debug, Clone)]
pub struct ListItem {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,

    /// Leading whitespace before the dash.
    pub indent: String,

    /// Trailing annotation after the closing `**`, preserved verbatim.
    pub extra: String,
}

/// One line of a parsed plan document.
///
/// Every variant retains the original text; serialization is the ordered
/// concatenation of `raw`, so anything the parser did not recognize (and
/// anything recognized but untouched) round-trips byte-for-byte.
#[derive(Debug, Clone)]
pub enum PlanLine {
    Header {
        level: usize,
        text: String,
        /// Normalized category when the heading names a food group.
        category: Option<Category>,
        raw: String,
    },
    /// Table chrome (header row or divider), kept opaque.
    TableStructure { raw: String },
    FoodRow { row: FoodRow, raw: String },
    ListItem { item: ListItem, raw: String },
    FreeText { raw: String },
}

impl PlanLine {
    /// Current serialized form of the line.
    pub fn raw(&self) -> &str {
        match self {
            PlanLine::Header { raw, .. }
            | PlanLine::TableStructure { raw }
            | PlanLine::FoodRow { raw, .. }
            | PlanLine::ListItem { raw, .. }
            | PlanLine::FreeText { raw } => raw,
        }
    }

    /// True for lines that can be edited as food entries.
    pub fn is_food(&self) -> bool {
        matches!(self, PlanLine::FoodRow { .. } | PlanLine::ListItem { .. })
    }

    /// Food fields of an editable line: (name, quantity, unit, category).
    pub fn food_fields(&self) -> Option<(&str, f64, Unit, Category)> {
        match self {
            PlanLine::FoodRow { row, .. } => {
                Some((row.name.as_str(), row.quantity, row.unit, row.category))
            }
            PlanLine::ListItem { item, .. } => {
                Some((item.name.as_str(), item.quantity, item.unit, item.category))
            }
            _ => None,
        }
    }
}

/// Outcome of one portion-exchange operation.
#[derive(Debug, Clone)]
pub struct SubstitutionResult {
    /// Name of the replacement food.
    pub food_name: String,

    /// Quantity preserving the original portion count.
    pub quantity: f64,

    pub unit: Unit,

    /// Recomputed calories, rounded to the nearest kcal.
    pub calories: f64,

    /// Recomputed macros, rounded to one decimal.
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tokens() {
        assert_eq!(Unit::parse_token("g"), Some(Unit::Grams));
        assert_eq!(Unit::parse_token("GR"), Some(Unit::Grams));
        assert_eq!(Unit::parse_token("ml"), Some(Unit::Milliliters));
        assert_eq!(Unit::parse_token("unidades"), Some(Unit::Units));
        assert_eq!(Unit::parse_token("Porciones"), Some(Unit::Portions));
        assert_eq!(Unit::parse_token("porción"), Some(Unit::Portions));
        assert_eq!(Unit::parse_token("tazas"), None);
    }

    #[test]
    fn test_raw_passthrough() {
        let line = PlanLine::FreeText {
            raw: "Notas del coach".to_string(),
        };
        assert_eq!(line.raw(), "Notas del coach");
        assert!(!line.is_food());
        assert!(line.food_fields().is_none());
    }
}
