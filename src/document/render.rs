use crate::models::{FoodRow, ListItem, SubstitutionResult, Unit};

/// Positional slots of a full food row: name, quantity, household
/// measure, protein, carbs, fat, calories.
pub const FULL_ROW_CELLS: usize = 7;

/// Index of the calorie slot.
pub const CAL_COLUMN: usize = 6;

/// Placeholder for a missing household measure.
pub const MEASURE_PLACEHOLDER: &str = "-";

/// Quantity as written in a table cell ("250 g", "1.5 porciones").
pub fn format_quantity_cell(quantity: f64, unit: Unit) -> String {
    format!("{} {}", format_number(quantity, unit), unit.label())
}

/// Quantity as written inline in a list item ("250g", "1.5 porciones").
pub fn format_quantity_inline(quantity: f64, unit: Unit) -> String {
    let number = format_number(quantity, unit);
    if unit.attaches() {
        format!("{}{}", number, unit.label())
    } else {
        format!("{} {}", number, unit.label())
    }
}

fn format_number(quantity: f64, unit: Unit) -> String {
    if unit == Unit::Portions && quantity.fract() != 0.0 {
        format!("{:.1}", quantity)
    } else {
        format!("{:.0}", quantity)
    }
}

/// Emit the pipe-delimited form of a row's cells.
pub fn render_cells(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Emit a list item from its parsed fields.
pub fn render_list_item(item: &ListItem) -> String {
    format!(
        "{}- **{} {}**{}",
        item.indent,
        format_quantity_inline(item.quantity, item.unit),
        item.name,
        item.extra
    )
}

/// Rewrite a table row in place after a substitution.
///
/// Rows carrying the full positional slots are rebuilt slot-wise, cells
/// beyond the known columns preserved verbatim. Shorter rows fall back to
/// a literal replacement of the old name and quantity-cell substrings in
/// the original text, so a nonstandard row degrades instead of failing.
pub fn rewrite_food_row(
    row: &mut FoodRow,
    raw: &mut String,
    result: &SubstitutionResult,
    household: Option<&str>,
) {
    let old_name = row.name.clone();
    let old_qty_cell = row.cells.get(1).cloned().unwrap_or_default();
    let new_qty_cell = format_quantity_cell(result.quantity, result.unit);

    if row.cells.len() >= FULL_ROW_CELLS {
        row.cells[0] = result.food_name.clone();
        row.cells[1] = new_qty_cell;
        row.cells[2] = household.unwrap_or(MEASURE_PLACEHOLDER).to_string();
        row.cells[3] = format!("{:.1}", result.protein);
        row.cells[4] = format!("{:.1}", result.carbs);
        row.cells[5] = format!("{:.1}", result.fat);
        row.cells[CAL_COLUMN] = format!("{:.0}", result.calories);
        *raw = render_cells(&row.cells);
    } else {
        let mut updated = raw.replace(&old_name, &result.food_name);
        if !old_qty_cell.is_empty() {
            updated = updated.replace(&old_qty_cell, &new_qty_cell);
        }
        *raw = updated;

        row.cells[0] = result.food_name.clone();
        if row.cells.len() > 1 {
            row.cells[1] = new_qty_cell;
        }
    }

    row.name = result.food_name.clone();
    row.quantity = result.quantity;
    row.unit = result.unit;
}

/// Rewrite a list item in place after a substitution; the trailing
/// annotation and indent survive.
pub fn rewrite_list_item(item: &mut ListItem, raw: &mut String, result: &SubstitutionResult) {
    item.name = result.food_name.clone();
    item.quantity = result.quantity;
    item.unit = result.unit;
    *raw = render_list_item(item);
}
