use crate::document::render::CAL_COLUMN;
use crate::document::PlanDocument;
use crate::exchange::constants::CALORIE_TOLERANCE;
use crate::models::PlanLine;

/// Advisory calorie total for live display.
///
/// Sums the positional calorie slot of food rows and any `N kcal` figure
/// in other lines; a line without a parseable figure contributes zero.
/// Not authoritative, just a running estimate.
pub fn estimated_calories(doc: &PlanDocument) -> f64 {
    doc.lines().iter().map(line_calories).sum()
}

/// Calorie figure of one line, zero when none can be read.
pub fn line_calories(line: &PlanLine) -> f64 {
    if let PlanLine::FoodRow { row, .. } = line {
        if let Some(kcal) = row.cells.get(CAL_COLUMN).and_then(|c| parse_kcal_cell(c)) {
            return kcal;
        }
    }
    extract_kcal(line.raw()).unwrap_or(0.0)
}

fn parse_kcal_cell(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().trim_end_matches("kcal").trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.replace(',', ".").parse().ok()
}

/// Scan text for a number followed by `kcal`, attached or space-separated.
pub fn extract_kcal(text: &str) -> Option<f64> {
    let lower = text.to_lowercase();
    let idx = lower.find("kcal")?;

    let digits: String = lower[..idx]
        .trim_end()
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.replace(',', ".").parse().ok()
}

/// Acceptance check for a generated day plan: the computed total must sit
/// within 3% of the calorie objective.
pub fn within_tolerance(total: f64, target: f64) -> bool {
    if target <= 0.0 {
        return false;
    }
    (total - target).abs() <= target * CALORIE_TOLERANCE
}
