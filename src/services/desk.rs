use parking_lot::Mutex;
use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;

use crate::error::ValidationError;
use crate::models::order::{OrderDetails, OrderId, OrderRecord};
use crate::models::transport::{Transport, TransportMode};
use crate::services::ledger::OrderLedger;
use crate::services::policy::TransportPolicy;

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitReceipt {
    pub record_id: OrderId,
    pub mode: TransportMode,
    pub transport_label: String,
    pub eta_label: String,
    pub eta_days: u32,
}

/// One ledger entry as listed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub record_id: OrderId,
    pub mode: TransportMode,
    pub transport_label: String,
    pub eta_label: String,
}

impl From<&OrderRecord> for RecordSummary {
    fn from(record: &OrderRecord) -> Self {
        Self {
            record_id: record.id,
            mode: record.transport.mode(),
            transport_label: record.transport.describe(),
            eta_label: record.transport.eta().label,
        }
    }
}

/// Request boundary around the order ledger.
///
/// Every mutation takes the single ledger lock, so ledger order is arrival
/// order and a returned `submit` is visible to the next `list_records`.
/// Transport selection runs before the lock is taken.
pub struct OrderDesk {
    ledger: Mutex<OrderLedger>,
    id_range: RangeInclusive<OrderId>,
}

impl OrderDesk {
    pub const DEFAULT_ID_RANGE: RangeInclusive<OrderId> = 1000..=9999;

    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(OrderLedger::new()),
            id_range: Self::DEFAULT_ID_RANGE,
        }
    }

    pub fn with_id_range(id_range: RangeInclusive<OrderId>) -> Result<Self, ValidationError> {
        if id_range.is_empty() {
            return Err(ValidationError::EmptyIdRange {
                min: *id_range.start(),
                max: *id_range.end(),
            });
        }

        Ok(Self {
            ledger: Mutex::new(OrderLedger::new()),
            id_range,
        })
    }

    /// Random id for callers that do not bring their own. Not guaranteed unique.
    pub fn next_order_id(&self) -> OrderId {
        rand::thread_rng().gen_range(self.id_range.clone())
    }

    pub fn submit(&self, details: OrderDetails) -> SubmitReceipt {
        let transport = TransportPolicy::select(&details);
        let eta = transport.eta();
        let receipt = SubmitReceipt {
            record_id: details.id(),
            mode: transport.mode(),
            transport_label: transport.describe(),
            eta_label: eta.label,
            eta_days: eta.days,
        };

        self.ledger.lock().append(OrderRecord::new(details, transport));

        tracing::info!(
            order_id = receipt.record_id,
            mode = %receipt.mode,
            eta_days = receipt.eta_days,
            "order processed"
        );
        receipt
    }

    /// Validates raw attributes and submits them in one step.
    pub fn submit_raw(
        &self,
        id: OrderId,
        weight_kg: f64,
        distance_km: f64,
        urgent: bool,
    ) -> Result<SubmitReceipt, ValidationError> {
        let details = OrderDetails::new(id, weight_kg, distance_km, urgent).map_err(|e| {
            tracing::warn!(order_id = id, error = %e, "order rejected");
            e
        })?;
        Ok(self.submit(details))
    }

    pub fn list_records(&self) -> Vec<RecordSummary> {
        self.ledger.lock().snapshot().map(RecordSummary::from).collect()
    }

    pub fn records(&self) -> Vec<OrderRecord> {
        self.ledger.lock().snapshot().cloned().collect()
    }

    pub fn reset(&self) {
        let mut ledger = self.ledger.lock();
        let dropped = ledger.len();
        ledger.clear();
        tracing::info!(dropped, "order ledger reset");
    }
}

impl Default for OrderDesk {
    fn default() -> Self {
        Self::new()
    }
}
