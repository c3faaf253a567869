// Flat per-participant VAT, only for participants marked VAT exclusive
use super::{format_percent, ChargeCalculator};
use shared::models::Participant;

pub const VAT_RATE_PERCENT: f64 = 15.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct Vat;

impl ChargeCalculator for Vat {
    fn label(&self) -> String {
        format!("VAT ({}%)", format_percent(VAT_RATE_PERCENT))
    }

    fn calculate(&self, participant: &Participant, subtotal: f64) -> f64 {
        if participant.vat_exclusive {
            subtotal * (VAT_RATE_PERCENT / 100.0)
        } else {
            0.0
        }
    }
}
