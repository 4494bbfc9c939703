use thiserror::Error;

/// Errors raised while building or querying the item catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Entry rejected because its id is empty or whitespace
    #[error("Invalid item definition: id must not be blank")]
    InvalidEntry,

    /// Unchecked lookup of an id that must exist
    #[error("Item id not found: {0}")]
    NotFound(String),

    #[error("Failed to parse item catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read item catalog: {0}")]
    Io(#[from] std::io::Error),
}
