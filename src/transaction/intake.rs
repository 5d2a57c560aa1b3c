//! The transaction form: the values a user has entered so far, whether the
//! form is open, and the validation that runs when the form is submitted.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    ledger::Ledger,
    transaction::{Transaction, TransactionBuilder, TransactionKind},
};

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// The form data sent by the browser when a field of the transaction form is
/// edited or the form is submitted.
///
/// Every field is kept as the raw text from the form. Missing fields are
/// treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionForm {
    /// Whether the transaction is an income or expense.
    #[serde(default)]
    pub kind: TransactionKind,
    /// The amount in dollars.
    #[serde(default)]
    pub amount: String,
    /// One of the categories for `kind`.
    #[serde(default)]
    pub category: String,
    /// Optional text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

/// The values of an open transaction form.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// Whether the transaction is an income or expense.
    pub kind: TransactionKind,
    /// The amount as entered by the user.
    pub amount: String,
    /// The selected category, empty if none is selected.
    pub category: String,
    /// The description as entered by the user.
    pub description: String,
    /// The date as entered by the user, `YYYY-MM-DD`.
    pub date: String,
}

impl TransactionDraft {
    /// Create a draft with the default values: an expense dated `today` with
    /// every other field empty.
    pub fn new(today: Date) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: today.to_string(),
        }
    }

    /// Change the kind of transaction.
    ///
    /// The category is cleared when the kind changes since the categories
    /// differ between kinds.
    pub fn set_kind(&mut self, kind: TransactionKind) {
        if self.kind != kind {
            self.kind = kind;
            self.category.clear();
        }
    }

    /// Copy the values from `form` into the draft.
    ///
    /// If `form` changes the kind, the submitted category is ignored and the
    /// category is cleared.
    pub fn apply(&mut self, form: TransactionForm) {
        let kind_changed = self.kind != form.kind;
        self.set_kind(form.kind);

        if !kind_changed {
            self.category = form.category;
        }

        self.amount = form.amount;
        self.description = form.description;
        self.date = form.date;
    }

    /// Replace every value in the draft with the values from `form`.
    ///
    /// Unlike [TransactionDraft::apply], the submitted category is kept even
    /// if `form` changes the kind. The category is still checked against the
    /// kind by [TransactionDraft::validate].
    pub fn replace_with(&mut self, form: TransactionForm) {
        *self = Self {
            kind: form.kind,
            amount: form.amount,
            category: form.category,
            description: form.description,
            date: form.date,
        };
    }

    /// Check the draft and convert it into a transaction ready to commit.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingRequiredField] if the amount or category is empty,
    /// - [Error::InvalidAmount] if the amount is not a finite, non-negative number,
    /// - [Error::InvalidCategory] if the category is not one of the categories for the kind,
    /// - or [Error::InvalidDate] if the date is not formatted as `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<TransactionBuilder, Error> {
        let amount = self.amount.trim();
        let category = self.category.trim();

        if amount.is_empty() || category.is_empty() {
            return Err(Error::MissingRequiredField);
        }

        let amount = parse_amount(amount)?;

        if !self.kind.allows_category(category) {
            return Err(Error::InvalidCategory {
                kind: self.kind,
                category: category.to_owned(),
            });
        }

        let date = parse_date(&self.date)?;

        Ok(
            Transaction::build(self.kind, amount, category, date)
                .description(self.description.trim()),
        )
    }
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Whether the transaction form is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// The form is hidden.
    Closed,
    /// The form is shown and its values are held in a [TransactionDraft].
    Open,
}

/// A transaction that was added to the ledger by submitting the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// The transaction as stored in the ledger.
    pub transaction: Transaction,
    /// The amount as the user entered it.
    pub amount_text: String,
}

impl Receipt {
    /// The message to show the user, e.g. "Expense of $12.50 added successfully."
    pub fn success_message(&self) -> String {
        format!(
            "{} of ${} added successfully.",
            self.transaction.kind.label(),
            self.amount_text
        )
    }
}

/// The transaction form.
///
/// The form starts closed. Opening it creates a draft with default values,
/// submitting it successfully or cancelling it closes it again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeForm {
    draft: Option<TransactionDraft>,
}

impl IntakeForm {
    /// Create a closed form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the form is open or closed.
    pub fn state(&self) -> FormState {
        match self.draft {
            Some(_) => FormState::Open,
            None => FormState::Closed,
        }
    }

    /// The values of the form if it is open.
    pub fn draft(&self) -> Option<&TransactionDraft> {
        self.draft.as_ref()
    }

    /// Open the form with the date defaulting to `today`.
    ///
    /// If the form is already open the values entered so far are kept.
    pub fn open(&mut self, today: Date) -> &TransactionDraft {
        self.draft.get_or_insert_with(|| TransactionDraft::new(today))
    }

    /// Close the form and discard the values entered so far.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Update the open form with the values in `form`.
    ///
    /// # Errors
    /// Returns [Error::IntakeClosed] if the form is not open.
    pub fn edit(&mut self, form: TransactionForm) -> Result<&TransactionDraft, Error> {
        let draft = self.draft.as_mut().ok_or(Error::IntakeClosed)?;
        draft.apply(form);

        Ok(draft)
    }

    /// Replace the values of the open form with `form`, then add the
    /// transaction to `ledger` and close the form.
    ///
    /// On error the form stays open with the values from `form` and the
    /// ledger is left unchanged.
    ///
    /// # Errors
    /// Returns [Error::IntakeClosed] if the form is not open, otherwise any of
    /// the errors from [TransactionDraft::validate].
    pub fn submit(
        &mut self,
        form: TransactionForm,
        ledger: &mut Ledger,
    ) -> Result<Receipt, Error> {
        let draft = self.draft.as_mut().ok_or(Error::IntakeClosed)?;
        draft.replace_with(form);

        let builder = draft.validate()?;
        let amount_text = draft.amount.trim().to_owned();
        let transaction = ledger.commit(builder);
        self.draft = None;

        Ok(Receipt {
            transaction,
            amount_text,
        })
    }
}
