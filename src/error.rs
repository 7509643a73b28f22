#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TrialsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dataset error from {source_name}: {message}")]
    Dataset {
        source_name: String,
        message: String,
    },

    #[error("Dataset JSON error from {source_name}: {source}")]
    DatasetJson {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{entity} '{id}' not found.\n\n{suggestion}")]
    NotFound {
        entity: String,
        id: String,
        suggestion: String,
    },

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
