//! Defines the endpoints for editing and cancelling the open transaction form.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::{
    session::{SessionState, lock_session},
    transaction::{
        TransactionForm,
        form::{intake_dialog, transaction_form_fields},
    },
};

/// A route handler for updating the values of the open transaction form.
///
/// Responds with the re-rendered form fields, e.g. so that the category list
/// matches a newly selected kind of transaction.
pub async fn update_draft_endpoint(
    State(state): State<SessionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match session.edit_intake(form) {
        Ok(draft) => transaction_form_fields(draft).into_response(),
        Err(error) => {
            tracing::warn!("could not update transaction form: {error}");
            error.into_alert_response()
        }
    }
}

/// A route handler for closing the transaction form without adding a
/// transaction.
///
/// Responds with the empty form dialog.
pub async fn cancel_transaction_endpoint(State(state): State<SessionState>) -> Response {
    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    session.cancel_intake();
    tracing::debug!("cancelled transaction form");

    intake_dialog(None).into_response()
}
