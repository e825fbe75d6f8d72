use crate::classify::{
    classify_category, classify_difficulty, classify_serves, classify_time, CATEGORY_TAGS,
    DIFFICULTY_TAGS, SERVES_TAGS, TIME_TAGS,
};
use crate::duration::combine_duration;
use crate::error::{CatalogError, Result};
use crate::record::RecipeRecord;
use recipe_graph::{ItemCard, RecipeGraph, TagKind};
use std::fs;
use std::path::Path;

/// Read a catalog file (a JSON array of records).
///
/// One-shot: an IO or decode failure is fatal to the build step, not
/// retried.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<RecipeRecord>> {
    let path = path.as_ref();
    log::info!("Loading catalog from {:?}", path);

    let data = fs::read_to_string(path)?;
    let records: Vec<RecipeRecord> = serde_json::from_str(&data)?;

    log::info!("Loaded {} catalog records", records.len());
    Ok(records)
}

/// Build the recipe graph from catalog records.
///
/// Seeds the fixed tag vocabulary, then inserts one item node per record
/// and links it to the four tags the classifiers derive. A malformed
/// record (unknown subcategory, unparseable duration, rating outside 0-5)
/// aborts the build.
pub fn build_graph(records: &[RecipeRecord]) -> Result<RecipeGraph> {
    let mut graph = RecipeGraph::new();
    seed_tags(&mut graph);

    for record in records {
        let rating = validate_rating(record)?;

        if graph.find_node(&record.name).is_some() {
            log::warn!("Duplicate catalog entry {:?} dropped", record.name);
            continue;
        }

        graph.add_item(ItemCard {
            name: record.name.clone(),
            url: record.url.clone(),
            image: record.image.clone(),
            description: record.description.clone(),
            rating,
        });

        graph.add_edge(&record.name, classify_category(&record.subcategory)?)?;
        graph.add_edge(&record.name, classify_difficulty(&record.difficult))?;
        graph.add_edge(&record.name, classify_serves(record.serves))?;

        let minutes = combine_duration(&record.times)?;
        graph.add_edge(&record.name, classify_time(minutes))?;
    }

    log::info!(
        "Built recipe graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn seed_tags(graph: &mut RecipeGraph) {
    for label in CATEGORY_TAGS {
        graph.add_tag(label, TagKind::Subcategory);
    }
    for label in DIFFICULTY_TAGS {
        graph.add_tag(label, TagKind::Difficulty);
    }
    for label in SERVES_TAGS {
        graph.add_tag(label, TagKind::Serves);
    }
    for label in TIME_TAGS {
        graph.add_tag(label, TagKind::TimeBucket);
    }
}

fn validate_rating(record: &RecipeRecord) -> Result<u8> {
    u8::try_from(record.rattings)
        .ok()
        .filter(|rating| *rating <= 5)
        .ok_or_else(|| CatalogError::InvalidRating {
            name: record.name.clone(),
            rating: record.rattings,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn record(name: &str, subcategory: &str, rattings: i64) -> RecipeRecord {
        RecipeRecord {
            name: name.to_string(),
            url: format!("https://recipes.test/{name}"),
            image: format!("https://img.test/{name}.jpg"),
            description: format!("{name} description"),
            rattings,
            subcategory: subcategory.to_string(),
            difficult: "Easy".to_string(),
            serves: 2,
            times: HashMap::from([("Cooking".to_string(), "15 mins".to_string())]),
        }
    }

    #[test]
    fn test_empty_catalog_still_seeds_vocabulary() {
        let graph = build_graph(&[]).unwrap();

        // 5 categories + 2 difficulties + 3 serving tiers + 4 time buckets
        assert_eq!(graph.node_count(), 14);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_each_item_gets_four_edges() {
        let graph = build_graph(&[record("Toast", "Breakfast recipes", 3)]).unwrap();

        assert_eq!(graph.node_count(), 15);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_unknown_subcategory_aborts_build() {
        let records = vec![record("Toast", "Space food", 3)];

        assert!(matches!(
            build_graph(&records),
            Err(CatalogError::UnknownCategory(raw)) if raw == "Space food"
        ));
    }

    #[test]
    fn test_rating_out_of_range_aborts_build() {
        for bad in [-1, 6] {
            let records = vec![record("Toast", "Breakfast recipes", bad)];
            assert!(matches!(
                build_graph(&records),
                Err(CatalogError::InvalidRating { rating, .. }) if rating == bad
            ));
        }
    }

    #[test]
    fn test_duplicate_name_keeps_first_record() {
        let mut second = record("Toast", "Desserts", 5);
        second.serves = 6;
        let records = vec![record("Toast", "Breakfast recipes", 3), second];

        let graph = build_graph(&records).unwrap();

        assert_eq!(graph.node_count(), 15);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.items().next().unwrap().rating, 3);
        assert_eq!(
            graph.items_matching(&["Meal-Specific Recipes".to_string()]).len(),
            1
        );
        assert!(graph.items_matching(&["Miscellaneous".to_string()]).is_empty());
    }

    #[test]
    fn test_unparseable_duration_aborts_build() {
        let mut bad = record("Toast", "Breakfast recipes", 3);
        bad.times
            .insert("Preparation".to_string(), "a while".to_string());

        assert!(matches!(
            build_graph(&[bad]),
            Err(CatalogError::DurationFormat(_))
        ));
    }
}
