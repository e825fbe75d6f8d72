use serde::Deserialize;
use std::collections::HashMap;

/// One catalog entry, in the feed's own field spelling.
///
/// Fields the recommender does not use (author, ingredients, steps,
/// nutrients, vote_count) are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRecord {
    /// Item identity, assumed unique in the catalog
    pub name: String,

    /// Source page for the recipe
    pub url: String,

    /// Image location
    pub image: String,

    /// Free-text description
    pub description: String,

    /// Rating, 0-5 in a well-formed feed ("rattings" is the feed's spelling)
    pub rattings: i64,

    /// Raw category key, resolved through the fixed category table
    pub subcategory: String,

    /// "Easy" or anything else (anything else counts as challenging)
    pub difficult: String,

    /// Serving count
    pub serves: u32,

    /// Free-text durations keyed "Preparation" and/or "Cooking"
    #[serde(default)]
    pub times: HashMap<String, String>,
}
