pub mod desk;
pub mod ledger;
pub mod policy;

pub use desk::{OrderDesk, RecordSummary, SubmitReceipt};

use crate::config::Config;
use crate::error::ValidationError;

pub struct AppState {
    pub desk: OrderDesk,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, ValidationError> {
        let desk = OrderDesk::with_id_range(config.order_id_range())?;
        Ok(Self { desk })
    }
}
