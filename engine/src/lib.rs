// Engine library root: bill state store, charges and billing calculations.

pub mod charges;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use config::BillSettings;
pub use data::{
    BillState, BillStore, IdGenerator, SequentialIdGenerator, SubscriptionId, UuidIdGenerator,
};
pub use error::BillError;
pub use services::{bill_totals, participant_totals, BillSummary, ParticipantSummary, SummaryLine};

// Models live in `shared`; re-exported so the rendering layer needs only this crate.
pub use shared::models::{ChargeBreakdown, Item, ItemId, Participant, ParticipantId, ServiceCharge};
