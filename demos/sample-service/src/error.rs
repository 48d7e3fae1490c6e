// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Service errors and their HTTP mapping.
//!
//! | Variant | Status |
//! |---------|--------|
//! | [`ServiceError::NotFound`] | 404 |
//! | [`ServiceError::Invalid`] | 422 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response}
};
use serde::Serialize;

/// Error returned by fallible service methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// No record with the given id.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Record kind.
        entity: &'static str,
        /// Requested id.
        id:     i64
    },

    /// The request was understood but rejected.
    #[error("{0}")]
    Invalid(String)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String
}

impl ServiceError {
    /// HTTP status of the error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string()
        };
        (self.status(), Json(body)).into_response()
    }
}
