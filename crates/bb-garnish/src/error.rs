use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{0}")]
    NotFound(String),
    #[error("{entity} {id} has a malformed {field}: {reason}")]
    MalformedRecord {
        entity: &'static str,
        id: i64,
        field: &'static str,
        reason: String,
    },
    #[error("burger {burger_id} is served by restaurant {restaurant_id}, which does not exist")]
    DanglingReference { burger_id: i64, restaurant_id: i64 },
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("the store could not be queried: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}

impl QueryError {
    /// Whether the error should be reported to the caller rather than treated as fatal.
    pub fn is_reportable(&self) -> bool {
        matches!(self, QueryError::NotFound(_) | QueryError::InvalidQuery(_))
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read the file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("unable to parse the file: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("unable to write the file: {0}")]
    WriteError(#[from] std::io::Error),
    #[error("unable to serialize the data: {0}")]
    SerializeError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("the store rejected the import: {0}")]
    StoreError(#[from] sqlx::Error),
    #[error("unable to encode a structured field: {0}")]
    EncodeError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read the config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("unable to parse the config file: {0}")]
    ParseError(#[from] toml::de::Error),
}
