mod document;
pub mod parser;
pub mod render;
pub mod storage;
pub mod totals;

pub use document::PlanDocument;
pub use storage::{load_plan_text, save_plan_text};
pub use totals::{estimated_calories, extract_kcal, within_tolerance};
