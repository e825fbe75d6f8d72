//! # Recipe Graph
//!
//! Food recommendation through graph matching of recipes and filter tags.
//!
//! ## Features
//!
//! - **Bipartite attribute graph** - recipes and filter tags as nodes
//! - **Identity registry** - label/name lookup across both node kinds
//! - **Tag matching** - items satisfying every selected filter
//! - **Ranked recommendation** - highest-rated matches first, capped per page
//!
//! ## Architecture
//!
//! ```text
//! RecipeRecord[]
//!     │
//!     ├──> Graph Builder (recipe-catalog)
//!     │      ├─ Seed fixed tag vocabulary
//!     │      ├─ Insert one item node per record
//!     │      └─ Link item to its four derived tags
//!     │
//!     ├──> Recipe Graph (petgraph)
//!     │      ├─ Nodes: tags (category, difficulty, serves, time)
//!     │      │         and items (name, url, image, description, rating)
//!     │      └─ Edges: undirected item <-> tag links
//!     │
//!     └──> Query Engine
//!            ├─ Match items adjacent to every selected tag
//!            ├─ Rank by rating (descending, stable)
//!            └─ Truncate to the caller's page size
//! ```

mod error;
mod graph;
mod recommend;
mod types;

pub use error::{GraphError, Result};
pub use recommend::recommend;
pub use types::{ItemCard, NodeData, RecipeGraph, TagKind};
