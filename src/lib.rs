pub mod catalog;
pub mod cli;
pub mod document;
pub mod error;
pub mod exchange;
pub mod interface;
pub mod models;

pub use catalog::FoodCatalog;
pub use document::PlanDocument;
pub use error::{Result, SwapError};
pub use models::{FoodItem, PlanLine};
