// Derived views over a bill snapshot
pub mod billing_service;
pub mod summary;

pub use billing_service::{bill_totals, participant_totals};
pub use summary::{BillSummary, ParticipantSummary, SummaryLine};
