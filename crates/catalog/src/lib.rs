//! # Recipe Catalog
//!
//! Catalog ingestion for the recipe graph.
//!
//! ## Pipeline
//!
//! ```text
//! recipes.json
//!     │
//!     ├──> Catalog Loader (one-shot serde read)
//!     │      └─> RecipeRecord[]
//!     │
//!     ├──> Classifiers (category table, difficulty,
//!     │                 serving tier, duration parsing)
//!     │      └─> One tag label per filter dimension
//!     │
//!     └──> Graph Builder
//!            └─> RecipeGraph (items linked to their four tags)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use recipe_catalog::{build_graph, load_catalog};
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = load_catalog("recipes.json")?;
//!     let graph = build_graph(&records)?;
//!
//!     println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
//!     Ok(())
//! }
//! ```

mod builder;
mod classify;
mod duration;
mod error;
mod record;

pub use builder::{build_graph, load_catalog};
pub use classify::{
    classify_category, classify_difficulty, classify_serves, classify_time, CATEGORY_TAGS,
    DIFFICULTY_TAGS, SERVES_TAGS, TIME_TAGS,
};
pub use duration::{combine_duration, parse_duration};
pub use error::{CatalogError, Result};
pub use record::RecipeRecord;
