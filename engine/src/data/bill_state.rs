// Immutable bill snapshot and its pure transition functions.
//
// Every transition takes `&self` and returns a fresh `BillState`, or `None` when the
// request changes nothing (unknown id, same value). The store relies on that `None`
// to skip publishing.

use serde::{Deserialize, Serialize};
use shared::models::{ChargeBreakdown, Item, ItemId, Participant, ParticipantId, ServiceCharge};
use std::collections::BTreeMap;

use crate::services::billing_service;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillState {
    participants: Vec<Participant>,
    service_charge: ServiceCharge,
    pending_items: BTreeMap<ParticipantId, String>,
    revision: u64,
}

impl BillState {
    pub fn new(service_charge: ServiceCharge) -> Self {
        Self {
            service_charge,
            ..Self::default()
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    pub fn service_charge(&self) -> ServiceCharge {
        self.service_charge
    }

    /// Draft price text for a participant; empty when nothing is pending.
    pub fn pending_item_text(&self, id: &ParticipantId) -> &str {
        self.pending_items.get(id).map(String::as_str).unwrap_or("")
    }

    /// Incremented by every transition that produced a new snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn participant_totals(&self, id: &ParticipantId) -> Option<ChargeBreakdown> {
        self.participant(id)
            .map(|p| billing_service::participant_totals(p, &self.service_charge))
    }

    pub fn bill_totals(&self) -> ChargeBreakdown {
        billing_service::bill_totals(&self.participants, &self.service_charge)
    }

    pub fn with_participant(&self, participant: Participant) -> BillState {
        let mut next = self.next_revision();
        next.participants.push(participant);
        next
    }

    pub fn without_participant(&self, id: &ParticipantId) -> Option<BillState> {
        self.participant(id)?;
        let mut next = self.next_revision();
        next.participants.retain(|p| &p.id != id);
        next.pending_items.remove(id);
        Some(next)
    }

    pub fn with_participant_renamed(&self, id: &ParticipantId, name: &str) -> Option<BillState> {
        self.update_participant(id, |p| {
            if p.name == name {
                return false;
            }
            p.name = name.to_string();
            true
        })
    }

    pub fn with_vat_toggled(&self, id: &ParticipantId) -> Option<BillState> {
        self.update_participant(id, |p| {
            p.vat_exclusive = !p.vat_exclusive;
            true
        })
    }

    /// Appends the item and clears the participant's pending text.
    pub fn with_item(&self, id: &ParticipantId, item: Item) -> Option<BillState> {
        let mut next = self.update_participant(id, |p| {
            p.items.push(item);
            true
        })?;
        next.pending_items.remove(id);
        Some(next)
    }

    pub fn without_item(&self, id: &ParticipantId, item_id: &ItemId) -> Option<BillState> {
        self.participant(id)?.item(item_id)?;
        self.update_participant(id, |p| {
            p.items.retain(|item| &item.id != item_id);
            true
        })
    }

    pub fn with_service_charge_enabled(&self, enabled: bool) -> Option<BillState> {
        if self.service_charge.enabled == enabled {
            return None;
        }
        let mut next = self.next_revision();
        next.service_charge.enabled = enabled;
        Some(next)
    }

    /// Non-finite percentages are refused; any finite value, negative included, is kept.
    pub fn with_service_charge_percent(&self, percent: f64) -> Option<BillState> {
        if !percent.is_finite() || self.service_charge.percent == percent {
            return None;
        }
        let mut next = self.next_revision();
        next.service_charge.percent = percent;
        Some(next)
    }

    pub fn with_pending_item_text(&self, id: &ParticipantId, text: &str) -> Option<BillState> {
        self.participant(id)?;
        if self.pending_item_text(id) == text {
            return None;
        }
        let mut next = self.next_revision();
        if text.is_empty() {
            next.pending_items.remove(id);
        } else {
            next.pending_items.insert(id.clone(), text.to_string());
        }
        Some(next)
    }

    fn next_revision(&self) -> BillState {
        let mut next = self.clone();
        next.revision += 1;
        next
    }

    // `apply` returns false when it left the participant unchanged.
    fn update_participant<F>(&self, id: &ParticipantId, apply: F) -> Option<BillState>
    where
        F: FnOnce(&mut Participant) -> bool,
    {
        let index = self.participants.iter().position(|p| &p.id == id)?;
        let mut next = self.next_revision();
        if apply(&mut next.participants[index]) {
            Some(next)
        } else {
            None
        }
    }
}
