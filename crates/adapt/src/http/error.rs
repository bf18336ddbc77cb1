use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::response::ApiResponse;
use http::StatusCode;
use thiserror::Error;
use tracing::{error, warn};

use crate::mql::{QueryError, StoreError};

#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("validation error")]
    Validation(Vec<String>),

    #[error("invalid request body: {0}")]
    Body(String),

    #[error("{0}")]
    NotFound(String),
}

impl From<crate::Error> for HttpError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::Query(e) => HttpError::Query(e),
            crate::Error::Store(e) => HttpError::Store(e),
            crate::Error::Validation(errors) => HttpError::Validation(errors),
        }
    }
}

impl HttpError {
    pub fn to_status(&self) -> StatusCode {
        match self {
            HttpError::Query(_) => StatusCode::BAD_REQUEST,
            HttpError::Validation(_) => StatusCode::BAD_REQUEST,
            HttpError::Body(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.to_status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let message = self.to_string();
        let errors = match self {
            HttpError::Validation(errors) => Some(errors),
            _ => None,
        };
        let body = ApiResponse::<()>::error(status.as_u16(), message, errors);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::query::Criteria;

    #[test]
    fn status_mapping() {
        let query = HttpError::Query(QueryError::InvalidIdentifier("x".into()));
        assert_eq!(query.to_status(), StatusCode::BAD_REQUEST);

        let store = HttpError::Store(StoreError::Unavailable("down".into()));
        assert_eq!(store.to_status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = HttpError::NotFound("No data found".into());
        assert_eq!(missing.to_status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "No data found");
    }

    #[test]
    fn service_errors_convert() {
        let err: HttpError = crate::Error::Query(QueryError::UnexpectedValueCount {
            criteria: Criteria::Equal,
            count: 2,
        })
        .into();
        assert!(matches!(err, HttpError::Query(_)));

        let err: HttpError = crate::Error::Validation(vec!["sku is required".into()]).into();
        assert_eq!(err.to_string(), "validation error");
        assert_eq!(err.to_status(), StatusCode::BAD_REQUEST);
    }
}
