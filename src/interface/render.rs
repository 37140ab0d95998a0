use crate::document::render::format_quantity_inline;
use crate::document::{totals, PlanDocument};
use crate::models::{FoodItem, PlanLine, SubstitutionResult};

/// One-line description of an editable food line for pickers.
pub fn describe_food_line(line: &PlanLine) -> String {
    match line.food_fields() {
        Some((name, quantity, unit, category)) => format!(
            "{} - {} [{}]",
            name,
            format_quantity_inline(quantity, unit),
            category.label()
        ),
        None => line.raw().to_string(),
    }
}

/// Display the document with line numbers and an advisory total.
pub fn display_document(doc: &PlanDocument) {
    println!();
    println!("=== Plan ===");
    println!();

    for (i, line) in doc.lines().iter().enumerate() {
        let marker = if line.is_food() { "*" } else { " " };
        println!("{:>3} {} {}", i + 1, marker, line.raw());
    }

    println!();
    println!(
        "Estimated total: {:.0} kcal (advisory)",
        totals::estimated_calories(doc)
    );
    println!();
}

/// Show the outcome of one substitution.
pub fn display_substitution(result: &SubstitutionResult) {
    println!(
        "  -> {} {} | {:.0} kcal, P:{:.1} C:{:.1} F:{:.1}",
        format_quantity_inline(result.quantity, result.unit),
        result.food_name,
        result.calories,
        result.protein,
        result.carbs,
        result.fat
    );
}

/// Show the advisory total, with a tolerance verdict when a target is
/// known.
pub fn display_totals(total: f64, target: Option<f64>) {
    println!("Estimated total: {:.0} kcal", total);

    if let Some(target) = target {
        if totals::within_tolerance(total, target) {
            println!("Within 3% of the {:.0} kcal target.", target);
        } else {
            println!(
                "Outside the 3% band around {:.0} kcal (off by {:.0}).",
                target,
                total - target
            );
        }
    }
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let portion = match food.portion_grams() {
            Some(g) => format!("{:.0} g/porción", g),
            None if food.is_generic() => "por porción".to_string(),
            None => "porción desconocida".to_string(),
        };
        println!(
            "  {} [{}] - {} cal, P:{} C:{} F:{} ({})",
            food.name,
            food.category.label(),
            food.calories,
            food.protein,
            food.carbs,
            food.fat,
            portion
        );
    }

    println!();
}
