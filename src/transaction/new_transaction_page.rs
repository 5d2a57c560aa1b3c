//! Defines the route handler that opens the transaction form.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    session::{SharedSession, lock_session},
    timezone::local_today,
    transaction::form::intake_dialog,
};

/// The state needed to open the transaction form.
#[derive(Debug, Clone)]
pub struct NewTransactionState {
    /// The ledger and transaction form.
    pub session: SharedSession,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Open the transaction form and render the form dialog.
///
/// If the form is already open, the dialog is rendered with the values
/// entered so far.
pub async fn get_new_transaction_page(State(state): State<NewTransactionState>) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    let draft = session.open_intake(today);
    tracing::debug!("opened transaction form with kind {}", draft.kind);

    intake_dialog(Some(draft)).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use scraper::Selector;

    use crate::{
        session::Session,
        test_utils::{assert_status_ok, parse_html_fragment},
        transaction::{FormState, TransactionForm, TransactionKind},
    };

    use super::{NewTransactionState, get_new_transaction_page};

    fn get_state(timezone: &str) -> NewTransactionState {
        NewTransactionState {
            session: Arc::new(Mutex::new(Session::new())),
            local_timezone: timezone.to_owned(),
        }
    }

    #[tokio::test]
    async fn opens_form() {
        let state = get_state("Etc/UTC");

        let response = get_new_transaction_page(State(state.clone())).await;

        assert_status_ok(&response);
        assert_eq!(
            state.session.lock().unwrap().intake().state(),
            FormState::Open
        );
        let html = parse_html_fragment(response).await;
        assert!(
            html.select(&Selector::parse("#intake-dialog form").unwrap())
                .next()
                .is_some(),
            "want an open dialog with a form"
        );
    }

    #[tokio::test]
    async fn reopening_keeps_entered_values() {
        let state = get_state("Etc/UTC");
        get_new_transaction_page(State(state.clone())).await;
        state
            .session
            .lock()
            .unwrap()
            .edit_intake(TransactionForm {
                kind: TransactionKind::Income,
                amount: "42".to_owned(),
                ..Default::default()
            })
            .unwrap();

        let response = get_new_transaction_page(State(state)).await;

        let html = parse_html_fragment(response).await;
        let amount = html
            .select(&Selector::parse("input[name=amount]").unwrap())
            .next()
            .expect("No amount input found");
        assert_eq!(amount.value().attr("value"), Some("42"));
    }

    #[tokio::test]
    async fn invalid_timezone_is_server_error() {
        let state = get_state("Not/A_Timezone");

        let response = get_new_transaction_page(State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            state.session.lock().unwrap().intake().state(),
            FormState::Closed
        );
    }
}
