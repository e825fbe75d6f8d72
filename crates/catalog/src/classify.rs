use crate::error::{CatalogError, Result};

/// Top-level category tags.
pub const CATEGORY_TAGS: [&str; 5] = [
    "Recipes with Animal Products",
    "Vegan Recipes",
    "Vegetarian Recipes",
    "Meal-Specific Recipes",
    "Miscellaneous",
];

/// Difficulty tags.
pub const DIFFICULTY_TAGS: [&str; 2] = ["Easy", "Challenging"];

/// Serving-tier tags.
pub const SERVES_TAGS: [&str; 3] = ["1 ~ 2", "3 ~ 4", "5+"];

/// Time-bucket tags.
pub const TIME_TAGS: [&str; 4] = [
    "Quick (0 ~ 20 mins)",
    "Moderate (20 ~ 40 mins)",
    "Lengthy (40 ~ 60 mins)",
    "More than 1 hr",
];

/// Raw feed subcategory -> top-level category tag.
const SUBCATEGORY_MAP: [(&str, &str); 12] = [
    ("Chicken", "Recipes with Animal Products"),
    ("Fish and seafood", "Recipes with Animal Products"),
    ("Meat", "Recipes with Animal Products"),
    ("Pasta", "Recipes with Animal Products"),
    ("Cheese recipes", "Vegetarian Recipes"),
    ("Vegetarian", "Vegetarian Recipes"),
    ("Vegan", "Vegan Recipes"),
    ("Breakfast recipes", "Meal-Specific Recipes"),
    ("Lunch recipes", "Meal-Specific Recipes"),
    ("Dinner recipes", "Meal-Specific Recipes"),
    ("Storecupboard", "Miscellaneous"),
    ("Desserts", "Miscellaneous"),
];

/// Resolve a raw feed subcategory through the fixed table.
pub fn classify_category(raw: &str) -> Result<&'static str> {
    SUBCATEGORY_MAP
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, tag)| *tag)
        .ok_or_else(|| CatalogError::UnknownCategory(raw.to_string()))
}

/// "Easy" stays easy; every other value counts as challenging.
pub fn classify_difficulty(raw: &str) -> &'static str {
    if raw == "Easy" {
        "Easy"
    } else {
        "Challenging"
    }
}

pub fn classify_serves(serves: u32) -> &'static str {
    if serves < 3 {
        "1 ~ 2"
    } else if serves < 5 {
        "3 ~ 4"
    } else {
        "5+"
    }
}

/// Bucket combined minutes. Boundaries are inclusive on the lower bucket.
pub fn classify_time(minutes: u32) -> &'static str {
    if minutes <= 20 {
        "Quick (0 ~ 20 mins)"
    } else if minutes <= 40 {
        "Moderate (20 ~ 40 mins)"
    } else if minutes <= 60 {
        "Lengthy (40 ~ 60 mins)"
    } else {
        "More than 1 hr"
    }
}
