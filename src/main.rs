use clap::Parser;
use std::path::Path;

use portion_swap_rs::catalog::{
    import_catalog_csv, load_catalog, save_catalog, seed_generic_blocks, FoodCatalog,
};
use portion_swap_rs::cli::{Cli, Command};
use portion_swap_rs::document::{load_plan_text, save_plan_text, totals, PlanDocument};
use portion_swap_rs::error::Result;
use portion_swap_rs::interface::{
    display_document, display_food_list, display_substitution, display_totals, prompt_action,
    prompt_line_choice, prompt_new_quantity, prompt_replacement, prompt_target_calories,
    prompt_yes_no, SwapAction,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Swap { plan } => cmd_swap(&cli.catalog, &plan),
        Command::Totals { plan } => cmd_totals(&plan),
        Command::Check { plan, target } => cmd_check(&plan, target),
        Command::SeedGenerics => cmd_seed_generics(&cli.catalog),
        Command::Import { file } => cmd_import(&cli.catalog, &file),
    }
}

/// Interactive substitution session over a plan file.
fn cmd_swap(catalog_path: &str, plan_path: &str) -> Result<()> {
    if !Path::new(catalog_path).exists() {
        eprintln!("Food catalog not found: {}", catalog_path);
        eprintln!("Run 'import' or 'seed-generics' to create one.");
        return Ok(());
    }

    let catalog = FoodCatalog::new(load_catalog(catalog_path)?);
    if catalog.is_empty() {
        println!("The catalog is empty: no substitution options.");
        return Ok(());
    }
    println!("Loaded {} foods", catalog.len());

    let Some(original) = load_plan_text(plan_path)? else {
        eprintln!("Plan file not found: {}", plan_path);
        return Ok(());
    };

    let mut doc = PlanDocument::parse(&original);
    if doc.food_lines().is_empty() {
        println!("No editable food lines in this plan.");
        return Ok(());
    }

    loop {
        display_document(&doc);

        let Some(index) = prompt_line_choice(&doc)? else {
            break;
        };

        match prompt_action()? {
            SwapAction::Substitute => {
                let Some((_, _, _, category)) = doc.food_fields_at(index) else {
                    continue;
                };
                let candidates = catalog.swap_candidates(category);

                let Some(name) = prompt_replacement(&candidates)? else {
                    continue;
                };

                match doc.substitute(index, &catalog, &name) {
                    Some(result) => display_substitution(&result),
                    None => println!("Nothing to do."),
                }
            }
            SwapAction::Quantity => {
                let Some((_, _, unit, _)) = doc.food_fields_at(index) else {
                    continue;
                };
                let quantity = match prompt_new_quantity(unit) {
                    Ok(q) => q,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                match doc.set_quantity(index, &catalog, quantity) {
                    Some(result) => display_substitution(&result),
                    None => println!("That food is not in the catalog; quantity unchanged."),
                }
            }
            SwapAction::Back => {}
        }
    }

    let serialized = doc.serialize();
    if serialized == original {
        println!("No changes made.");
        return Ok(());
    }

    if prompt_yes_no("Save the edited plan?", true)? {
        save_plan_text(plan_path, &serialized)?;
        println!("Plan saved.");
    } else {
        println!("Changes discarded.");
    }

    Ok(())
}

/// Show the advisory calorie total of a plan.
fn cmd_totals(plan_path: &str) -> Result<()> {
    let Some(text) = load_plan_text(plan_path)? else {
        eprintln!("Plan file not found: {}", plan_path);
        return Ok(());
    };

    let doc = PlanDocument::parse(&text);
    display_totals(totals::estimated_calories(&doc), None);
    Ok(())
}

/// Check a plan's total against a calorie target.
fn cmd_check(plan_path: &str, target: Option<f64>) -> Result<()> {
    let Some(text) = load_plan_text(plan_path)? else {
        eprintln!("Plan file not found: {}", plan_path);
        return Ok(());
    };

    let target = match target {
        Some(t) => t,
        None => prompt_target_calories()?,
    };

    let doc = PlanDocument::parse(&text);
    display_totals(totals::estimated_calories(&doc), Some(target));
    Ok(())
}

/// Rewrite the three generic block entries in the catalog.
fn cmd_seed_generics(catalog_path: &str) -> Result<()> {
    let mut items = if Path::new(catalog_path).exists() {
        load_catalog(catalog_path)?
    } else {
        Vec::new()
    };

    seed_generic_blocks(&mut items);
    save_catalog(catalog_path, &items)?;

    let catalog = FoodCatalog::new(items);
    display_food_list(&catalog.generics(), "Generic blocks");
    println!("Catalog saved ({} foods).", catalog.len());
    Ok(())
}

/// Merge a CSV food export into the catalog.
fn cmd_import(catalog_path: &str, csv_path: &str) -> Result<()> {
    if !Path::new(csv_path).exists() {
        eprintln!("CSV file not found: {}", csv_path);
        return Ok(());
    }

    let mut items = if Path::new(catalog_path).exists() {
        load_catalog(catalog_path)?
    } else {
        Vec::new()
    };

    let imported = import_catalog_csv(csv_path)?;
    let count = imported.len();

    // Imported rows win over existing ones with the same name.
    items.extend(imported);
    save_catalog(catalog_path, &items)?;

    println!("Imported {} foods into {}.", count, catalog_path);
    Ok(())
}
