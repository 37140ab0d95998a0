pub mod constants;
pub mod engine;

pub use constants::*;
pub use engine::{macros_for, portion_count, substitute, MacroBreakdown};
