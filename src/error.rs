//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError,
    transaction::TransactionKind,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount or category was left empty when submitting a transaction.
    #[error("the amount and category are required")]
    MissingRequiredField,

    /// The amount of a transaction is not a finite, non-negative number.
    ///
    /// Callers should pass in the amount text as the user entered it.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The category is not one of the categories for the kind of transaction.
    #[error("\"{category}\" is not a valid category for {kind} transactions")]
    InvalidCategory {
        /// The kind of transaction being created.
        kind: TransactionKind,
        /// The category that was submitted.
        category: String,
    },

    /// The date of a transaction is not formatted as `YYYY-MM-DD`.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// The transaction form was submitted or edited while it was closed.
    ///
    /// This usually happens when the form was submitted from a stale page,
    /// e.g. a second browser tab.
    #[error("the transaction form is not open")]
    IntakeClosed,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the session lock.
    ///
    /// The lock is only poisoned if a thread panicked while holding it.
    #[error("could not acquire the session lock")]
    SessionLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::SessionLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingRequiredField => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing Information".to_owned(),
                    details: "Please fill in all required fields.".to_owned(),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "\"{amount}\" is not a valid amount. Enter a positive number, e.g. 12.50."
                    ),
                },
            ),
            Error::InvalidCategory { kind, category } => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid category".to_owned(),
                    details: format!(
                        "\"{category}\" is not a category for {} transactions. \
                        Choose one of: {}.",
                        kind.label().to_lowercase(),
                        kind.categories().join(", ")
                    ),
                },
            ),
            Error::InvalidDate(date) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid transaction date".to_owned(),
                    details: format!("\"{date}\" is not a valid date."),
                },
            ),
            Error::IntakeClosed => (
                StatusCode::CONFLICT,
                Alert::Error {
                    message: "Form is closed".to_owned(),
                    details: "The transaction form was closed. \
                    Try refreshing the page and opening the form again."
                        .to_owned(),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
