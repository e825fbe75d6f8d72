use crate::types::{ItemCard, RecipeGraph};

/// Rank the items matching every selected tag, highest rating first.
///
/// The sort is stable: equal ratings keep the order the registry produced.
/// `page_size` caps the result; call sites pick their own page size rather
/// than the engine guessing one. An empty result is a valid outcome.
pub fn recommend(graph: &RecipeGraph, selected: &[String], page_size: usize) -> Vec<ItemCard> {
    let mut matches = graph.items_matching(selected);
    matches.sort_by(|a, b| b.rating.cmp(&a.rating));

    log::debug!(
        "{} of {} items match {:?}, returning up to {}",
        matches.len(),
        graph.items().count(),
        selected,
        page_size
    );

    matches.into_iter().take(page_size).cloned().collect()
}
