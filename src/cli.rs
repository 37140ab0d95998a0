use clap::{Parser, Subcommand};

/// PortionSwap — edit meal-plan documents with isocaloric food swaps.
#[derive(Parser, Debug)]
#[command(name = "portion_swap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_catalog.json")]
    pub catalog: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit a plan interactively, swapping foods portion-for-portion.
    Swap {
        /// Plan text file to edit.
        plan: String,
    },

    /// Show a plan's advisory calorie total.
    Totals {
        /// Plan text file to read.
        plan: String,
    },

    /// Check a plan's total against a calorie target (3% tolerance).
    Check {
        /// Plan text file to read.
        plan: String,

        /// Calorie target; prompted for when omitted.
        #[arg(long)]
        target: Option<f64>,
    },

    /// Rewrite the three generic block entries in the catalog.
    SeedGenerics,

    /// Merge foods from a CSV export into the catalog.
    Import {
        /// CSV file with catalog columns.
        file: String,
    },
}
