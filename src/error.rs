use thiserror::Error;

/// Result type alias for enrichment operations
pub type Result<T> = std::result::Result<T, EnrichError>;

/// Error types for attribute-bag enrichment
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Attribute bag parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Required attribute '{name}' is missing")]
    MissingAttribute { name: String },
}

impl EnrichError {
    /// Create a new missing attribute error
    pub fn missing_attribute<S: Into<String>>(name: S) -> Self {
        Self::MissingAttribute { name: name.into() }
    }
}
