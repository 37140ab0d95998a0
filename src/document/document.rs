use crate::catalog::FoodCatalog;
use crate::document::parser;
use crate::document::render::{rewrite_food_row, rewrite_list_item};
use crate::exchange::engine;
use crate::models::{Category, PlanLine, SubstitutionResult, Unit};

/// A parsed plan, owned by one editing session.
///
/// Serialization concatenates each line's current `raw` with newlines, so
/// any line the parser did not recognize, and any recognized line left
/// untouched, reproduces its original text exactly. Saving hands the
/// serialized blob back to storage in one write; discarding the value is
/// the cancel path.
#[derive(Debug, Clone)]
pub struct PlanDocument {
    lines: Vec<PlanLine>,
}

impl PlanDocument {
    /// Parse plan text top to bottom.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: parser::parse_lines(text),
        }
    }

    /// Re-serialize the document.
    pub fn serialize(&self) -> String {
        self.lines
            .iter()
            .map(PlanLine::raw)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn lines(&self) -> &[PlanLine] {
        &self.lines
    }

    /// Editable food lines with their document indices.
    pub fn food_lines(&self) -> Vec<(usize, &PlanLine)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_food())
            .collect()
    }

    /// Food fields of the line at `index`, if it is editable.
    pub fn food_fields_at(&self, index: usize) -> Option<(String, f64, Unit, Category)> {
        self.lines
            .get(index)?
            .food_fields()
            .map(|(name, qty, unit, cat)| (name.to_string(), qty, unit, cat))
    }

    /// Swap the food on an editable line, preserving its portion count.
    ///
    /// Returns `None` without touching the document when the line is not
    /// editable or the replacement name is not in the catalog; an invalid
    /// request is a no-op, never an error. A missing entry for the
    /// line's current food falls through to the engine's one-portion
    /// assumption.
    pub fn substitute(
        &mut self,
        index: usize,
        catalog: &FoodCatalog,
        new_food_name: &str,
    ) -> Option<SubstitutionResult> {
        let new_food = catalog.get(new_food_name)?.clone();
        let (old_name, old_quantity, old_unit, _) = self.food_fields_at(index)?;
        let old_food = catalog.get(&old_name).cloned();

        let result = engine::substitute(old_food.as_ref(), old_quantity, old_unit, &new_food);
        self.rewrite(index, &result, new_food.household_measure.as_deref());
        Some(result)
    }

    /// Change the quantity on an editable line and recompute its macros.
    ///
    /// Needs the line's food in the catalog to price the new quantity;
    /// otherwise a no-op. Non-positive or non-finite quantities are
    /// rejected the same way.
    pub fn set_quantity(
        &mut self,
        index: usize,
        catalog: &FoodCatalog,
        quantity: f64,
    ) -> Option<SubstitutionResult> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return None;
        }

        let (name, _, old_unit, _) = self.food_fields_at(index)?;
        let food = catalog.get(&name)?.clone();

        let unit = if food.is_generic() {
            Unit::Portions
        } else {
            old_unit
        };
        let macros = engine::macros_for(&food, quantity).rounded();
        let result = SubstitutionResult {
            food_name: food.name.clone(),
            quantity,
            unit,
            calories: macros.calories,
            protein: macros.protein,
            carbs: macros.carbs,
            fat: macros.fat,
        };
        self.rewrite(index, &result, food.household_measure.as_deref());
        Some(result)
    }

    fn rewrite(&mut self, index: usize, result: &SubstitutionResult, household: Option<&str>) {
        match &mut self.lines[index] {
            PlanLine::FoodRow { row, raw } => rewrite_food_row(row, raw, result, household),
            PlanLine::ListItem { item, raw } => rewrite_list_item(item, raw, result),
            _ => {}
        }
    }
}
