//! Defines the page to display when a route does not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::html::error_view;

/// The 404 page.
pub struct NotFoundError;

impl NotFoundError {
    pub fn into_html(self) -> Markup {
        error_view(
            "Not Found",
            "404",
            "Something's missing.",
            "Sorry, we can't find that page. You'll find lots to explore on the dashboard.",
        )
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.into_html()).into_response()
    }
}

/// The fallback route handler for any route that does not exist.
pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}
