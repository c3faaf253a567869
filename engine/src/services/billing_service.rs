// Pure billing arithmetic. Nothing here rounds: callers format for display.
use crate::charges::{ChargeCalculator, ServiceChargeRule, Vat};
use shared::models::{ChargeBreakdown, Participant, ServiceCharge};

pub fn participant_totals(
    participant: &Participant,
    service_charge: &ServiceCharge,
) -> ChargeBreakdown {
    let subtotal: f64 = participant.items.iter().map(|item| item.price).sum();
    let vat = Vat.calculate(participant, subtotal);
    let service = ServiceChargeRule::new(*service_charge).calculate(participant, subtotal);

    ChargeBreakdown {
        subtotal,
        vat,
        service_charge: service,
        total: subtotal + vat + service,
    }
}

/// Component-wise sum of the unrounded per-participant totals.
pub fn bill_totals(
    participants: &[Participant],
    service_charge: &ServiceCharge,
) -> ChargeBreakdown {
    participants
        .iter()
        .map(|p| participant_totals(p, service_charge))
        .sum()
}
