// Global service charge, applied uniformly to every participant when enabled
use super::{format_percent, ChargeCalculator};
use shared::models::{Participant, ServiceCharge};

#[derive(Debug, Clone, Copy)]
pub struct ServiceChargeRule {
    settings: ServiceCharge,
}

impl ServiceChargeRule {
    pub fn new(settings: ServiceCharge) -> Self {
        Self { settings }
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }
}

impl ChargeCalculator for ServiceChargeRule {
    fn label(&self) -> String {
        format!("Service ({}%)", format_percent(self.settings.percent))
    }

    fn calculate(&self, _participant: &Participant, subtotal: f64) -> f64 {
        if self.settings.enabled {
            subtotal * (self.settings.percent / 100.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ParticipantId;

    fn participant() -> Participant {
        Participant::new(ParticipantId::from("p"), "Friend 1")
    }

    #[test]
    fn test_disabled_service_charge_is_zero() {
        let rule = ServiceChargeRule::new(ServiceCharge {
            enabled: false,
            percent: 10.0,
        });
        assert_eq!(rule.calculate(&participant(), 30.0), 0.0);
    }

    #[test]
    fn test_enabled_service_charge() {
        let rule = ServiceChargeRule::new(ServiceCharge {
            enabled: true,
            percent: 10.0,
        });
        assert!((rule.calculate(&participant(), 30.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_percent_acts_as_discount() {
        let rule = ServiceChargeRule::new(ServiceCharge {
            enabled: true,
            percent: -10.0,
        });
        assert!((rule.calculate(&participant(), 30.0) + 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_keeps_fractional_percent() {
        let rule = ServiceChargeRule::new(ServiceCharge {
            enabled: true,
            percent: 12.5,
        });
        assert_eq!(rule.label(), "Service (12.5%)");
        let rule = ServiceChargeRule::from(ServiceCharge::default());
        assert_eq!(rule.label(), "Service (10%)");
        assert!(!rule.is_enabled());
    }
}
