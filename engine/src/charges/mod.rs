// Surcharges applied on top of a participant's subtotal
pub mod service_charge;
pub mod vat;

pub use service_charge::ServiceChargeRule;
pub use vat::{Vat, VAT_RATE_PERCENT};

use shared::models::{Participant, ServiceCharge};

// Common trait for all charges
pub trait ChargeCalculator {
    /// Display label, e.g. "VAT (15%)".
    fn label(&self) -> String;
    /// Amount added to `subtotal` for this participant, 0.0 when the charge does not apply.
    fn calculate(&self, participant: &Participant, subtotal: f64) -> f64;
}

/// Formats a percentage the way it was typed: 10 -> "10", 12.5 -> "12.5".
pub(crate) fn format_percent(percent: f64) -> String {
    format!("{}", percent)
}

impl From<ServiceCharge> for ServiceChargeRule {
    fn from(settings: ServiceCharge) -> Self {
        ServiceChargeRule::new(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ParticipantId;

    #[test]
    fn charges_as_trait_objects() {
        let charges: Vec<Box<dyn ChargeCalculator>> = vec![
            Box::new(Vat),
            Box::new(ServiceChargeRule::new(ServiceCharge {
                enabled: true,
                percent: 10.0,
            })),
        ];
        let mut participant = Participant::new(ParticipantId::from("p"), "Friend 1");
        participant.vat_exclusive = true;

        let labels: Vec<String> = charges.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["VAT (15%)", "Service (10%)"]);
        let added: f64 = charges.iter().map(|c| c.calculate(&participant, 100.0)).sum();
        assert!((added - 25.0).abs() < 1e-9);
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(10.0), "10");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(-3.0), "-3");
    }
}
