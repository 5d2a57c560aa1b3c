//! The in-memory store of committed transactions.

use std::collections::VecDeque;

use time::OffsetDateTime;

use crate::transaction::{Transaction, TransactionBuilder, TransactionId};

/// The number of transactions shown in the recent transactions list.
pub const RECENT_TRANSACTIONS_LIMIT: usize = 5;

/// An insertion-ordered sequence of transactions, newest first.
///
/// Transactions are only ever added to the front. The ledger is never
/// reordered or deduplicated and committed transactions are never modified
/// or removed.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: VecDeque<Transaction>,
    last_id: Option<TransactionId>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an ID to `builder` and add the resulting transaction to the
    /// front of the ledger.
    ///
    /// Returns a copy of the committed transaction.
    pub fn commit(&mut self, builder: TransactionBuilder) -> Transaction {
        let id = self.next_id(current_millis());
        let transaction = builder.finalise(id);
        self.transactions.push_front(transaction.clone());

        transaction
    }

    /// All transactions, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// The [RECENT_TRANSACTIONS_LIMIT] most recently added transactions,
    /// newest first.
    ///
    /// Returns every transaction if there are fewer than the limit.
    pub fn recent(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().take(RECENT_TRANSACTIONS_LIMIT)
    }

    /// The number of transactions in the ledger.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Derive the next transaction ID from the time `now_millis`.
    ///
    /// Falls back to one more than the previous ID when the clock has not
    /// advanced (or has gone backwards) since the last commit.
    fn next_id(&mut self, now_millis: TransactionId) -> TransactionId {
        let id = match self.last_id {
            Some(last_id) if now_millis <= last_id => last_id + 1,
            _ => now_millis,
        };

        self.last_id = Some(id);

        id
    }
}

fn current_millis() -> TransactionId {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as TransactionId
}
