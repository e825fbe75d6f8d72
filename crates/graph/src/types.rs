use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filter dimension a tag node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagKind {
    Subcategory,
    Difficulty,
    Serves,
    TimeBucket,
}

/// Display metadata carried by one recommendable recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCard {
    /// Recipe name (identity, assumed unique in the catalog)
    pub name: String,

    /// Source page for the recipe
    pub url: String,

    /// Image location
    pub image: String,

    /// Free-text description
    pub description: String,

    /// Rating in 0..=5, validated by the builder
    pub rating: u8,
}

/// Node payload: one filter tag or one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeData {
    Tag { label: String, kind: TagKind },
    Item(ItemCard),
}

impl NodeData {
    /// Identity key: tag label or item name.
    pub fn identity(&self) -> &str {
        match self {
            NodeData::Tag { label, .. } => label,
            NodeData::Item(card) => &card.name,
        }
    }
}

/// Bipartite tag/item graph with identity lookup.
pub struct RecipeGraph {
    /// Undirected graph (item <-> tag links)
    pub(crate) graph: UnGraph<NodeData, ()>,

    /// Identity -> NodeIndex mapping, unique across both node kinds
    pub(crate) identity_index: HashMap<String, NodeIndex>,
}

impl RecipeGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            identity_index: HashMap::new(),
        }
    }

    /// Find node by identity (tag label or item name)
    pub fn find_node(&self, identity: &str) -> Option<NodeIndex> {
        self.identity_index.get(identity).copied()
    }

    /// Get all item cards, in insertion order
    pub fn items(&self) -> impl Iterator<Item = &ItemCard> {
        self.graph.node_weights().filter_map(|node| match node {
            NodeData::Item(card) => Some(card),
            NodeData::Tag { .. } => None,
        })
    }

    /// Get node count
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for RecipeGraph {
    fn default() -> Self {
        Self::new()
    }
}
