use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown map type `{0}`, expected `dmcat` or `changes`")]
    UnknownMapType(String),
    #[error("feature has no `id` property")]
    MissingFeatureId,
    #[error("feature id {0} is neither a string nor a number")]
    InvalidFeatureId(String),
}

/// Problems found while validating a drought dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("category list is empty")]
    NoCategories,
    #[error("category `{0}` is listed more than once")]
    DuplicateCategory(String),
    #[error("category `{value}` has invalid color `{color}`")]
    InvalidColor { value: String, color: String },
    #[error("grid feature #{index}: {source}")]
    Feature {
        index: usize,
        #[source]
        source: ModelError,
    },
}
