// Bill defaults, loaded from the embedded default.json or from JSON handed over by the host
use serde::Deserialize;
use shared::models::ServiceCharge;

use crate::error::BillError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BillSettings {
    /// Default participant names are "{prefix} {n}".
    pub participant_name_prefix: String,
    pub service_charge_enabled: bool,
    pub service_charge_percent: f64,
    pub currency_symbol: String,
}

impl Default for BillSettings {
    fn default() -> Self {
        let service_charge = ServiceCharge::default();
        BillSettings {
            participant_name_prefix: "Friend".to_string(),
            service_charge_enabled: service_charge.enabled,
            service_charge_percent: service_charge.percent,
            currency_symbol: "$".to_string(),
        }
    }
}

impl BillSettings {
    pub fn load_default() -> Result<Self, BillError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    /// Missing fields fall back to `BillSettings::default()`.
    pub fn from_json(json: &str) -> Result<Self, BillError> {
        let settings: BillSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), BillError> {
        if !self.service_charge_percent.is_finite() {
            return Err(BillError::ConfigError(format!(
                "service_charge_percent must be a finite number, got {}",
                self.service_charge_percent
            )));
        }
        Ok(())
    }

    pub fn service_charge(&self) -> ServiceCharge {
        ServiceCharge {
            enabled: self.service_charge_enabled,
            percent: self.service_charge_percent,
        }
    }
}
