//! Read-only JSON endpoints for the ledger and its summary.

use axum::{Json, extract::State};

use crate::{
    Error,
    dashboard::{Summary, summarize},
    session::{SessionState, lock_session},
    transaction::Transaction,
};

/// Get every transaction in the ledger as JSON, newest first.
pub async fn get_transactions_json(
    State(state): State<SessionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let session = lock_session(&state.session)?;

    Ok(Json(session.ledger().iter().cloned().collect()))
}

/// Get the balance, total income and total expenses of the ledger as JSON.
pub async fn get_summary_json(State(state): State<SessionState>) -> Result<Json<Summary>, Error> {
    let session = lock_session(&state.session)?;

    Ok(Json(summarize(session.ledger().iter())))
}
