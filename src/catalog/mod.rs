mod manager;
mod persistence;

pub use manager::FoodCatalog;
pub use persistence::{
    import_catalog_csv, load_catalog, save_catalog, seed_generic_blocks, FoodRecord,
};
