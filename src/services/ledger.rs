use crate::models::order::OrderRecord;

/// Append-only, insertion-ordered history of processed orders.
///
/// No internal locking: the owner serializes `append` and `clear`
/// (see [`crate::services::OrderDesk`]).
#[derive(Debug, Default)]
pub struct OrderLedger {
    records: Vec<OrderRecord>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: OrderRecord) {
        self.records.push(record);
    }

    /// Records in insertion order. The iterator is `Clone`, so it can be
    /// restarted without going back to the ledger.
    pub fn snapshot(&self) -> std::slice::Iter<'_, OrderRecord> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
