use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::document::PlanDocument;
use crate::error::{Result, SwapError};
use crate::exchange::constants::FUZZY_MATCH_THRESHOLD;
use crate::interface::render::describe_food_line;
use crate::models::{FoodItem, Unit};

/// What to do with a selected plan line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAction {
    Substitute,
    Quantity,
    Back,
}

/// Pick an editable line from the document; `None` ends the session.
pub fn prompt_line_choice(doc: &PlanDocument) -> Result<Option<usize>> {
    let food_lines = doc.food_lines();

    let mut options: Vec<String> = food_lines
        .iter()
        .map(|(_, line)| describe_food_line(line))
        .collect();
    options.push("Done editing".to_string());

    let selection = Select::new()
        .with_prompt("Which line do you want to edit?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < food_lines.len() {
        Ok(Some(food_lines[selection].0))
    } else {
        Ok(None)
    }
}

/// Choose the edit to apply to the selected line.
pub fn prompt_action() -> Result<SwapAction> {
    let options = ["Swap the food", "Change the quantity", "Back"];

    let selection = Select::new()
        .with_prompt("What do you want to change?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => SwapAction::Substitute,
        1 => SwapAction::Quantity,
        _ => SwapAction::Back,
    })
}

/// Pick a replacement food with fuzzy matching.
///
/// Exact name match first (case-insensitive), then Jaro-Winkler
/// candidates above the threshold: a single candidate is confirmed, more
/// are offered as a short selection. Empty input cancels.
pub fn prompt_replacement(candidates: &[&FoodItem]) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Replacement food (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try exact match first (case-insensitive)
        let exact = candidates
            .iter()
            .find(|f| f.name.to_lowercase() == input.to_lowercase());

        if let Some(food) = exact {
            return Ok(Some(food.name.clone()));
        }

        // Try fuzzy matching
        let mut matches: Vec<(&FoodItem, f64)> = candidates
            .iter()
            .map(|f| (*f, jaro_winkler(&f.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if matches.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if matches.len() == 1 {
            let food = matches[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(food.name.clone()));
            }
            continue;
        }

        // Multiple matches - let user select
        let options: Vec<String> = matches.iter().take(5).map(|(f, _)| f.name.clone()).collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(options[selection].clone()));
        }
    }
}

/// Prompt for a new quantity in the line's unit.
pub fn prompt_new_quantity(unit: Unit) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("New quantity ({})", unit.label()))
        .interact_text()?;

    let quantity: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| SwapError::InvalidInput("Invalid number".to_string()))?;

    if quantity <= 0.0 {
        return Err(SwapError::InvalidInput(
            "Quantity must be positive".to_string(),
        ));
    }

    Ok(quantity)
}

/// Prompt for the day's calorie objective.
pub fn prompt_target_calories() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Calorie target for this plan?")
        .default("2000".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| SwapError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
