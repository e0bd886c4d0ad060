#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Type {type_name} not contained in candidates {candidates:?}")]
    NoMatchingBaseType {
        type_name: String,
        candidates: Vec<String>,
    },
    #[error("Unsupported foreign collection: {0}")]
    UnsupportedForeignType(String),
    #[error("No converter found capable of converting from {source_type} to {target_type}")]
    NoConverter {
        source_type: String,
        target_type: String,
    },
}

pub type CollectionResult<T> = std::result::Result<T, CollectionError>;
