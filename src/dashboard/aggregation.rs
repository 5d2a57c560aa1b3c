//! Summary totals derived from the transactions in the ledger.

use serde::Serialize;

use crate::{
    html::round_to_cents,
    transaction::{Transaction, TransactionKind},
};

/// The totals shown in the overview cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Total income minus total expenses, may be negative.
    pub balance: f64,
    /// The sum of the amounts of all income transactions.
    pub total_income: f64,
    /// The sum of the amounts of all expense transactions.
    pub total_expenses: f64,
}

/// Calculate the balance, total income and total expenses of `transactions`.
///
/// An empty list of transactions results in all totals being zero. Totals are
/// rounded to the nearest cent so that sums like 0.3 - 0.1 - 0.2 come out as
/// exactly zero.
pub fn summarize<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Summary {
    let summary = transactions
        .into_iter()
        .fold(Summary::default(), |mut summary, transaction| {
            summary.balance += transaction.signed_amount();

            match transaction.kind {
                TransactionKind::Income => summary.total_income += transaction.amount,
                TransactionKind::Expense => summary.total_expenses += transaction.amount,
            }

            summary
        });

    Summary {
        balance: round_to_cents(summary.balance),
        total_income: round_to_cents(summary.total_income),
        total_expenses: round_to_cents(summary.total_expenses),
    }
}
