//! Transactions and the form used to add them.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The transaction form, its validation and its HTML
//! - Route handlers for the transaction form and the transactions page

mod core;
mod create_endpoint;
mod draft_endpoint;
mod form;
mod intake;
mod new_transaction_page;
mod transactions_page;
mod view;

pub use core::{
    EXPENSE_CATEGORIES, INCOME_CATEGORIES, Transaction, TransactionBuilder, TransactionId,
    TransactionKind,
};
pub use create_endpoint::{LEDGER_CHANGED_EVENT, create_transaction_endpoint};
pub use draft_endpoint::{cancel_transaction_endpoint, update_draft_endpoint};
pub use form::intake_dialog;
pub use intake::{FormState, IntakeForm, Receipt, TransactionDraft, TransactionForm};
pub use new_transaction_page::get_new_transaction_page;
pub use transactions_page::get_transactions_page;
pub use view::transaction_list;
