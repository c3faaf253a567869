// Owns the current bill snapshot and applies user-driven mutations to it.
//
// Mutations never fail: unknown ids and unparseable prices leave the snapshot as it
// is. When a mutation does change something, the store swaps in the new snapshot and
// hands it to every observer before returning.

use std::fmt;
use std::sync::Arc;

use shared::models::{Item, ItemId, Participant, ParticipantId, ServiceCharge};
use shared::utils::parse_price;

use super::bill_state::BillState;
use super::id_generator::{IdGenerator, UuidIdGenerator};
use crate::config::BillSettings;
use crate::error::BillError;
use crate::services::BillSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&Arc<BillState>)>;

pub struct BillStore {
    state: Arc<BillState>,
    settings: BillSettings,
    ids: Box<dyn IdGenerator>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for BillStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BillStore")
            .field("revision", &self.state.revision())
            .field("participants", &self.state.participants().len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for BillStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BillStore {
    pub fn new() -> Self {
        Self::with_settings(BillSettings::default())
    }

    pub fn with_settings(settings: BillSettings) -> Self {
        tracing::info!(
            service_charge_enabled = settings.service_charge_enabled,
            service_charge_percent = settings.service_charge_percent,
            "Creating bill store"
        );
        Self {
            state: Arc::new(BillState::new(settings.service_charge())),
            settings,
            ids: Box::new(UuidIdGenerator),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the id source, e.g. with a `SequentialIdGenerator` in tests.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn settings(&self) -> &BillSettings {
        &self.settings
    }

    /// The current snapshot. It is never modified; later mutations publish a new one.
    pub fn snapshot(&self) -> Arc<BillState> {
        Arc::clone(&self.state)
    }

    pub fn participants(&self) -> &[Participant] {
        self.state.participants()
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.state.participant(id)
    }

    pub fn service_charge(&self) -> ServiceCharge {
        self.state.service_charge()
    }

    pub fn pending_item_text(&self, id: &ParticipantId) -> &str {
        self.state.pending_item_text(id)
    }

    pub fn summary(&self) -> Option<BillSummary> {
        BillSummary::build(&self.state, &self.settings.currency_symbol)
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&Arc<BillState>) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn add_participant(&mut self) -> ParticipantId {
        let id = ParticipantId(self.ids.next_id());
        // Numbered from the current count; names are not renumbered on removal.
        let name = format!(
            "{} {}",
            self.settings.participant_name_prefix,
            self.state.participants().len() + 1
        );
        tracing::debug!(participant_id = %id, name = %name, "Adding participant");
        let next = self.state.with_participant(Participant::new(id.clone(), name));
        self.commit(Some(next));
        id
    }

    pub fn remove_participant(&mut self, id: &ParticipantId) -> bool {
        tracing::debug!(participant_id = %id, "Removing participant");
        let next = self.state.without_participant(id);
        self.commit(next)
    }

    pub fn rename_participant(&mut self, id: &ParticipantId, name: &str) -> bool {
        tracing::debug!(participant_id = %id, name = %name, "Renaming participant");
        let next = self.state.with_participant_renamed(id, name);
        self.commit(next)
    }

    pub fn toggle_vat_exclusive(&mut self, id: &ParticipantId) -> bool {
        tracing::debug!(participant_id = %id, "Toggling VAT exclusive");
        let next = self.state.with_vat_toggled(id);
        self.commit(next)
    }

    /// Adds an item from raw price text. Invalid prices and unknown participants are
    /// ignored and yield `None`.
    pub fn add_item(&mut self, participant_id: &ParticipantId, raw_price: &str) -> Option<ItemId> {
        match self.try_add_item(participant_id, raw_price) {
            Ok(item_id) => Some(item_id),
            Err(e) => {
                tracing::debug!(
                    participant_id = %participant_id,
                    raw_price = %raw_price,
                    error = %e,
                    "Item not added"
                );
                None
            }
        }
    }

    pub fn try_add_item(
        &mut self,
        participant_id: &ParticipantId,
        raw_price: &str,
    ) -> Result<ItemId, BillError> {
        if self.state.participant(participant_id).is_none() {
            return Err(BillError::ParticipantNotFound(participant_id.clone()));
        }
        let price = parse_price(raw_price).map_err(|e| BillError::InvalidPrice {
            raw: raw_price.to_string(),
            reason: e.to_string(),
        })?;

        let item = Item {
            id: ItemId(self.ids.next_id()),
            price,
        };
        let item_id = item.id.clone();
        let next = self
            .state
            .with_item(participant_id, item)
            .ok_or_else(|| BillError::ParticipantNotFound(participant_id.clone()))?;
        tracing::debug!(participant_id = %participant_id, item_id = %item_id, price, "Item added");
        self.commit(Some(next));
        Ok(item_id)
    }

    /// Adds an item from the participant's pending text, as when Enter is pressed in
    /// the price field.
    pub fn commit_pending_item(&mut self, participant_id: &ParticipantId) -> Option<ItemId> {
        let raw_price = self.state.pending_item_text(participant_id).to_string();
        self.add_item(participant_id, &raw_price)
    }

    pub fn remove_item(&mut self, participant_id: &ParticipantId, item_id: &ItemId) -> bool {
        tracing::debug!(participant_id = %participant_id, item_id = %item_id, "Removing item");
        let next = self.state.without_item(participant_id, item_id);
        self.commit(next)
    }

    pub fn set_service_charge_enabled(&mut self, enabled: bool) -> bool {
        tracing::debug!(enabled, "Setting service charge enabled");
        let next = self.state.with_service_charge_enabled(enabled);
        self.commit(next)
    }

    /// Any finite percentage is stored as given, negative values included.
    pub fn set_service_charge_percent(&mut self, percent: f64) -> bool {
        if !percent.is_finite() {
            tracing::warn!(percent, "Ignoring non-finite service charge percent");
            return false;
        }
        if percent < 0.0 {
            tracing::warn!(percent, "Applying negative service charge percent");
        } else {
            tracing::debug!(percent, "Setting service charge percent");
        }
        let next = self.state.with_service_charge_percent(percent);
        self.commit(next)
    }

    pub fn set_pending_item_text(&mut self, participant_id: &ParticipantId, text: &str) -> bool {
        let next = self.state.with_pending_item_text(participant_id, text);
        self.commit(next)
    }

    fn commit(&mut self, next: Option<BillState>) -> bool {
        let Some(next) = next else {
            return false;
        };
        self.state = Arc::new(next);
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
        true
    }
}
