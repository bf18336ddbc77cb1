pub mod http;
pub mod mql;
pub mod voucher;

use mql::{QueryError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("validation error: {}", .0.join(", "))]
    Validation(Vec<String>),
}
