use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unparseable duration: {0:?}")]
    DurationFormat(String),

    #[error("Unknown subcategory: {0:?}")]
    UnknownCategory(String),

    #[error("Rating out of range for {name:?}: {rating} (expected 0-5)")]
    InvalidRating { name: String, rating: i64 },

    #[error("Graph error: {0}")]
    Graph(#[from] recipe_graph::GraphError),
}
