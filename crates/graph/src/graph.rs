use crate::error::{GraphError, Result};
use crate::types::{ItemCard, NodeData, RecipeGraph, TagKind};
use petgraph::graph::NodeIndex;

impl RecipeGraph {
    /// Insert a tag node. No-op if the label is already registered.
    pub fn add_tag(&mut self, label: impl Into<String>, kind: TagKind) -> NodeIndex {
        let label = label.into();
        if let Some(&idx) = self.identity_index.get(&label) {
            return idx;
        }

        let idx = self.graph.add_node(NodeData::Tag {
            label: label.clone(),
            kind,
        });
        self.identity_index.insert(label, idx);
        idx
    }

    /// Insert an item node. No-op if the name is already registered.
    pub fn add_item(&mut self, card: ItemCard) -> NodeIndex {
        if let Some(&idx) = self.identity_index.get(&card.name) {
            return idx;
        }

        let data = NodeData::Item(card);
        let name = data.identity().to_string();
        let idx = self.graph.add_node(data);
        self.identity_index.insert(name, idx);
        idx
    }

    /// Link two existing nodes symmetrically. Re-linking an existing pair
    /// leaves the adjacency unchanged.
    pub fn add_edge(&mut self, id1: &str, id2: &str) -> Result<()> {
        if id1 == id2 {
            return Err(GraphError::SelfEdge(id1.to_string()));
        }

        let a = self
            .find_node(id1)
            .ok_or_else(|| GraphError::NodeNotFound(id1.to_string()))?;
        let b = self
            .find_node(id2)
            .ok_or_else(|| GraphError::NodeNotFound(id2.to_string()))?;

        self.graph.update_edge(a, b, ());
        Ok(())
    }

    /// Items adjacent to a tag node for every required label (logical AND).
    ///
    /// An empty selection matches every item; a label with no node in the
    /// graph matches none.
    pub fn items_matching(&self, required: &[String]) -> Vec<&ItemCard> {
        let mut required_idx = Vec::with_capacity(required.len());
        for label in required {
            match self.find_node(label) {
                Some(idx) => required_idx.push(idx),
                None => return Vec::new(),
            }
        }

        self.graph
            .node_indices()
            .filter_map(|idx| match self.graph.node_weight(idx) {
                Some(NodeData::Item(card))
                    if required_idx
                        .iter()
                        .all(|&tag| self.graph.contains_edge(idx, tag)) =>
                {
                    Some(card)
                }
                _ => None,
            })
            .collect()
    }
}
