//! Defines the endpoint for submitting the transaction form.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HX_TRIGGER;
use maud::html;

use crate::{
    alert::Alert,
    session::{SessionState, lock_session},
    transaction::{TransactionForm, form::INTAKE_DIALOG_ID},
};

/// The htmx event sent to the client whenever a transaction is added.
pub const LEDGER_CHANGED_EVENT: &str = "ledger-changed";

/// A route handler for submitting the transaction form.
///
/// On success the transaction is added to the ledger, the form is closed and
/// the response holds a success alert, an out-of-band swap that empties the
/// form dialog and the [LEDGER_CHANGED_EVENT] trigger. On failure the response
/// holds an error alert and the form stays open.
pub async fn create_transaction_endpoint(
    State(state): State<SessionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    let receipt = match session.submit_intake(form) {
        Ok(receipt) => receipt,
        Err(error) => {
            tracing::warn!("rejected transaction: {error}");
            return error.into_alert_response();
        }
    };

    tracing::info!(
        "added {} transaction {} ({} items in ledger)",
        receipt.transaction.kind,
        receipt.transaction.id,
        session.ledger().len()
    );

    let alert = Alert::Success {
        message: "Transaction Added".to_owned(),
        details: receipt.success_message(),
    };

    (
        [(HX_TRIGGER, LEDGER_CHANGED_EVENT)],
        html! {
            (alert.into_html())
            div id=(INTAKE_DIALOG_ID) hx-swap-oob="true" {}
        },
    )
        .into_response()
}
