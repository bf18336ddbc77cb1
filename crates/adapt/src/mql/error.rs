use domain::query::Criteria;
use thiserror::Error;

/// Request-validation failures raised while parsing or compiling a query.
///
/// None of these are retryable; the message is shown to the caller as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid query key `{0}`, expected `<field>.<criteria>`")]
    InvalidKey(String),

    #[error("unknown criteria `{criteria}` in query key `{key}`")]
    UnknownCriteria { key: String, criteria: String },

    #[error("`{criteria}` expects an integer value, got `{value}`")]
    InvalidNumericValue { criteria: Criteria, value: String },

    #[error("invalid id `{0}`")]
    InvalidIdentifier(String),

    #[error("invalid {key} query `{value}`, expected a positive integer")]
    InvalidPagination { key: &'static str, value: String },

    #[error("invalid sort order `{0}`, expected `asc` or `desc`")]
    InvalidSortOrder(String),

    #[error("empty value in query `{0}`")]
    EmptyValue(String),

    #[error("`{criteria}` expects a single value, got {count}")]
    UnexpectedValueCount { criteria: Criteria, count: usize },
}

/// Failures raised by the document store collaborator. Passed through
/// unchanged; the core never retries them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("other store error: {0}")]
    Other(String),
}
