use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(ParticipantId);
id_newtype!(ItemId);

/// A single priced line entry. The price is fixed once the item exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub price: f64,
}

/// One person sharing the bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub items: Vec<Item>, // insertion order is display order
    pub vat_exclusive: bool,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            vat_exclusive: false,
        }
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == item_id)
    }
}

/// Global service charge, applied to every participant when enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceCharge {
    pub enabled: bool,
    pub percent: f64,
}

impl Default for ServiceCharge {
    fn default() -> Self {
        Self {
            enabled: false,
            percent: 10.0,
        }
    }
}

/// The four derived monetary components, for one participant or the whole bill.
/// Values are unrounded; rounding happens only when formatting for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub subtotal: f64,
    pub vat: f64,
    pub service_charge: f64,
    pub total: f64,
}

impl std::ops::Add for ChargeBreakdown {
    type Output = ChargeBreakdown;

    fn add(self, rhs: ChargeBreakdown) -> ChargeBreakdown {
        ChargeBreakdown {
            subtotal: self.subtotal + rhs.subtotal,
            vat: self.vat + rhs.vat,
            service_charge: self.service_charge + rhs.service_charge,
            total: self.total + rhs.total,
        }
    }
}

impl std::iter::Sum for ChargeBreakdown {
    fn sum<I: Iterator<Item = ChargeBreakdown>>(iter: I) -> Self {
        iter.fold(ChargeBreakdown::default(), |acc, b| acc + b)
    }
}
