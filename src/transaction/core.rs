//! Defines the core data model for transactions and the fixed category vocabulary.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

// ============================================================================
// MODELS
// ============================================================================

/// Uniquely identifies a transaction within a session.
///
/// IDs are derived from the wall clock (milliseconds since the Unix epoch)
/// and are strictly increasing, see [crate::ledger::Ledger::commit].
pub type TransactionId = i64;

/// The categories a user may pick for an income transaction.
pub const INCOME_CATEGORIES: [&str; 5] =
    ["Salary", "Freelance", "Investment", "Gift", "Other Income"];

/// The categories a user may pick for an expense transaction.
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Utilities",
    "Entertainment",
    "Shopping",
    "Healthcare",
    "Other Expense",
];

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. groceries.
    #[default]
    Expense,
}

impl TransactionKind {
    /// The categories that are valid for this kind of transaction.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            TransactionKind::Income => &INCOME_CATEGORIES,
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// Whether `category` is one of the categories for this kind.
    ///
    /// Matching is exact, i.e. case-sensitive.
    pub fn allows_category(self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    /// Apply the sign convention of this kind to `amount`.
    ///
    /// Income adds to the balance and expenses subtract from it.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }

    /// The value used for this kind in HTML forms and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// The human readable name, e.g. "Income".
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are immutable once committed to the ledger.
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the money was earned or spent.
    pub kind: TransactionKind,
    /// The amount of money spent or earned, always non-negative.
    pub amount: f64,
    /// One of the categories allowed for `kind`.
    pub category: String,
    /// A text description of what the transaction was for, may be empty.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        kind: TransactionKind,
        amount: f64,
        category: &str,
        date: Date,
    ) -> TransactionBuilder {
        TransactionBuilder {
            kind,
            amount,
            category: category.to_owned(),
            description: String::new(),
            date,
        }
    }

    /// The amount with the sign convention of the transaction kind applied.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }

    /// The text to show for the transaction in lists.
    ///
    /// Falls back to the category when there is no description.
    pub fn display_name(&self) -> &str {
        if self.description.is_empty() {
            &self.category
        } else {
            &self.description
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The ID is assigned when the builder is committed to a
/// [Ledger](crate::ledger::Ledger).
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// let transaction = Transaction::build(
///         TransactionKind::Expense,
///         45.99,
///         "Food",
///         date!(2025 - 01 - 15),
///     )
///     .description("Coffee beans")
///     .finalise(1);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether the money was earned or spent.
    pub kind: TransactionKind,
    /// The non-negative amount of money.
    pub amount: f64,
    /// The category of the transaction, e.g. "Food", "Salary".
    pub category: String,
    /// A human-readable description of the transaction.
    ///
    /// Defaults to the empty string.
    pub description: String,
    /// The date when the transaction occurred.
    pub date: Date,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Create the transaction with the given `id`.
    pub fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
