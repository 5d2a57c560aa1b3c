//! The state of the app: the ledger and the transaction form.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use time::Date;

use crate::{
    AppState, Error,
    ledger::Ledger,
    transaction::{IntakeForm, Receipt, TransactionDraft, TransactionForm},
};

/// The ledger and the transaction form that writes to it.
///
/// The session is the only owner of the ledger, so the only way to add a
/// transaction is to submit the transaction form.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
    intake: IntakeForm,
}

/// A session shared between request handlers.
pub type SharedSession = Arc<Mutex<Session>>;

impl Session {
    /// Create a session with an empty ledger and a closed form.
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            intake: IntakeForm::new(),
        }
    }

    /// The transactions committed in this session.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The transaction form.
    pub fn intake(&self) -> &IntakeForm {
        &self.intake
    }

    /// Open the transaction form, see [IntakeForm::open].
    pub fn open_intake(&mut self, today: Date) -> &TransactionDraft {
        self.intake.open(today)
    }

    /// Close the transaction form without adding a transaction.
    pub fn cancel_intake(&mut self) {
        self.intake.cancel();
    }

    /// Update the values of the open transaction form, see [IntakeForm::edit].
    pub fn edit_intake(&mut self, form: TransactionForm) -> Result<&TransactionDraft, Error> {
        self.intake.edit(form)
    }

    /// Submit the transaction form, see [IntakeForm::submit].
    pub fn submit_intake(&mut self, form: TransactionForm) -> Result<Receipt, Error> {
        self.intake.submit(form, &mut self.ledger)
    }
}

/// The state needed by handlers that only read or write the session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// The ledger and transaction form.
    pub session: SharedSession,
}

impl FromRef<AppState> for SessionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// Acquire the lock on `session`.
///
/// # Errors
/// Returns [Error::SessionLockError] if the lock is poisoned.
pub fn lock_session(session: &SharedSession) -> Result<MutexGuard<'_, Session>, Error> {
    session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
        .map_err(|_| Error::SessionLockError)
}
