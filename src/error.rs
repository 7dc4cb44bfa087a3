//! Error type shared by the REST and MCP surfaces.
//!
//! The cart ledger and the catalog filter never fail; everything here is
//! raised at the boundary (catalog lookups, argument parsing, asset IO).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::catalog::models::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

impl StorefrontError {
    /// HTTP status used when the error reaches a REST client.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownProduct(_) => StatusCode::NOT_FOUND,
            Self::UnknownCategory(_)
            | Self::InvalidArguments(_)
            | Self::UnknownTool(_) => StatusCode::BAD_REQUEST,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidArguments(err.to_string())
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_product_maps_to_not_found() {
        let err = StorefrontError::UnknownProduct(42);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Unknown product: 42");
    }

    #[test]
    fn json_errors_become_invalid_arguments() {
        let parse = serde_json::from_str::<u64>("\"nope\"").unwrap_err();
        let err = StorefrontError::from(parse);
        assert!(matches!(err, StorefrontError::InvalidArguments(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
