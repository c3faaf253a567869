// Bill state: immutable snapshots, the store that owns them, and id generation
pub mod bill_state;
pub mod bill_store;
pub mod id_generator;

pub use bill_state::BillState;
pub use bill_store::{BillStore, SubscriptionId};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
