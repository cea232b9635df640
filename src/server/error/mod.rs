//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error that
//! wraps the domain errors and implements `IntoResponse` so handlers can return it
//! directly.
//!
//! Error kinds surfaced to clients:
//! - `NotFound` - a board, column, card, user or membership is missing (404)
//! - `AuthErr` - unauthenticated (401) or forbidden on a board (403)
//! - `BoardErr` - invalid move or reorder request (400)
//! - `Conflict` - the user is already a member (409)
//! - `TransactionErr` - the store failed inside a transactional batch (500)

pub mod auth;
pub mod board;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, board::BoardError, config::ConfigError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain errors such as
/// `AuthError` and `BoardError` handle their own response mapping, while the generic
/// variants map to standard status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or board authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected move, duplicate or reorder request.
    ///
    /// Delegates to `BoardError::into_response()` (400).
    #[error(transparent)]
    BoardErr(#[from] BoardError),

    /// Database operation error from SeaORM outside of a transactional batch.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The store failed while a transactional batch was open.
    ///
    /// Raised for begin, commit and rollback failures as well as any write failing
    /// inside the batch. The batch has been rolled back when this is returned.
    #[error("Transaction failed: {0}")]
    TransactionErr(sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// The request conflicts with existing state, such as a duplicate membership.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, and `BoardErr` via delegation
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For `TransactionErr` with a distinct message, and for
///   every other unclassified error
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BoardErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::TransactionErr(err) => {
                tracing::error!("Transaction failed and was rolled back: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Transaction failed".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a generic 500 response.
///
/// The full error is logged; the client only sees "Internal server error".
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
