// Display-ready rows for the rendering layer.
//
// Amounts are kept unrounded next to their formatted text, so the bill summary is
// the rounded sum of raw values and never the sum of already rounded rows.

use serde::Serialize;
use shared::models::{Participant, ParticipantId};
use shared::utils::format_currency;

use super::billing_service::{bill_totals, participant_totals};
use crate::charges::{ChargeCalculator, ServiceChargeRule, Vat};
use crate::data::BillState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: f64,
    pub display: String,
}

impl SummaryLine {
    fn new(label: impl Into<String>, amount: f64, currency_symbol: &str) -> Self {
        Self {
            label: label.into(),
            amount,
            display: format_currency(currency_symbol, amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantSummary {
    pub participant_id: ParticipantId,
    pub name: String,
    /// One formatted price per item, in item order.
    pub items: Vec<String>,
    pub lines: Vec<SummaryLine>,
}

impl ParticipantSummary {
    /// `None` for a participant without items; there is nothing to total yet.
    pub fn build(
        participant: &Participant,
        state: &BillState,
        currency_symbol: &str,
    ) -> Option<Self> {
        if participant.items.is_empty() {
            return None;
        }

        let service_charge = state.service_charge();
        let totals = participant_totals(participant, &service_charge);

        let mut lines = vec![SummaryLine::new("Subtotal", totals.subtotal, currency_symbol)];
        if participant.vat_exclusive {
            lines.push(SummaryLine::new(Vat.label(), totals.vat, currency_symbol));
        }
        let service = ServiceChargeRule::new(service_charge);
        if service.is_enabled() {
            lines.push(SummaryLine::new(service.label(), totals.service_charge, currency_symbol));
        }
        lines.push(SummaryLine::new("Total", totals.total, currency_symbol));

        Some(Self {
            participant_id: participant.id.clone(),
            name: participant.name.clone(),
            items: participant
                .items
                .iter()
                .map(|item| format_currency(currency_symbol, item.price))
                .collect(),
            lines,
        })
    }

    pub fn total(&self) -> Option<&SummaryLine> {
        self.lines.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillSummary {
    pub participants: Vec<ParticipantSummary>,
    pub lines: Vec<SummaryLine>,
}

impl BillSummary {
    /// `None` while the bill has no participants.
    pub fn build(state: &BillState, currency_symbol: &str) -> Option<Self> {
        if state.participants().is_empty() {
            return None;
        }

        let service_charge = state.service_charge();
        let totals = bill_totals(state.participants(), &service_charge);

        let mut lines = vec![
            SummaryLine::new("Subtotal", totals.subtotal, currency_symbol),
            SummaryLine::new("Total VAT", totals.vat, currency_symbol),
        ];
        if service_charge.enabled {
            lines.push(SummaryLine::new(
                "Total Service Charge",
                totals.service_charge,
                currency_symbol,
            ));
        }
        lines.push(SummaryLine::new("Final Total", totals.total, currency_symbol));

        let participants = state
            .participants()
            .iter()
            .filter_map(|p| ParticipantSummary::build(p, state, currency_symbol))
            .collect();

        Some(Self { participants, lines })
    }

    pub fn final_total(&self) -> Option<&SummaryLine> {
        self.lines.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Item, ItemId};

    fn create_participant(id: &str, prices: &[f64], vat_exclusive: bool) -> Participant {
        let mut p = Participant::new(ParticipantId::from(id), format!("Friend {}", id));
        p.vat_exclusive = vat_exclusive;
        p.items = prices
            .iter()
            .enumerate()
            .map(|(i, price)| Item {
                id: ItemId::from(format!("{}-{}", id, i).as_str()),
                price: *price,
            })
            .collect();
        p
    }

    fn labels(lines: &[SummaryLine]) -> Vec<&str> {
        lines.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn test_empty_bill_has_no_summary() {
        assert!(BillSummary::build(&BillState::default(), "$").is_none());
    }

    #[test]
    fn test_participant_without_items_is_skipped() {
        let state = BillState::default()
            .with_participant(create_participant("1", &[], false))
            .with_participant(create_participant("2", &[4.0], false));
        let summary = BillSummary::build(&state, "$").unwrap();
        assert_eq!(summary.participants.len(), 1);
        assert_eq!(summary.participants[0].name, "Friend 2");
    }

    #[test]
    fn test_lines_follow_vat_and_service_flags() {
        let state = BillState::default()
            .with_participant(create_participant("1", &[10.0, 20.0], true))
            .with_service_charge_enabled(true)
            .unwrap();
        let summary = BillSummary::build(&state, "$").unwrap();

        let p = &summary.participants[0];
        assert_eq!(labels(&p.lines), vec!["Subtotal", "VAT (15%)", "Service (10%)", "Total"]);
        assert_eq!(p.items, vec!["$10.00", "$20.00"]);
        assert_eq!(p.total().unwrap().display, "$37.50");

        assert_eq!(
            labels(&summary.lines),
            vec!["Subtotal", "Total VAT", "Total Service Charge", "Final Total"]
        );
        assert_eq!(summary.final_total().unwrap().display, "$37.50");
    }

    #[test]
    fn test_bill_lines_without_service_charge() {
        let state = BillState::default()
            .with_participant(create_participant("a", &[5.0], false))
            .with_participant(create_participant("b", &[15.0], true));
        let summary = BillSummary::build(&state, "$").unwrap();

        assert_eq!(labels(&summary.lines), vec!["Subtotal", "Total VAT", "Final Total"]);
        let displays: Vec<&str> = summary.lines.iter().map(|l| l.display.as_str()).collect();
        assert_eq!(displays, vec!["$20.00", "$2.25", "$22.25"]);
        assert_eq!(labels(&summary.participants[0].lines), vec!["Subtotal", "Total"]);
    }

    #[test]
    fn test_half_cent_vat_displays_rounded_up() {
        let state = BillState::default().with_participant(create_participant("a", &[7.5], true));
        let summary = BillSummary::build(&state, "$").unwrap();
        let displays: Vec<&str> = summary.participants[0]
            .lines
            .iter()
            .map(|l| l.display.as_str())
            .collect();
        assert_eq!(displays, vec!["$7.50", "$1.13", "$8.63"]);
    }

    #[test]
    fn test_final_total_rounds_raw_sum_once() {
        let state = BillState::default()
            .with_participant(create_participant("a", &[0.004], false))
            .with_participant(create_participant("b", &[0.004], false));
        let summary = BillSummary::build(&state, "$").unwrap();
        assert_eq!(summary.participants[0].total().unwrap().display, "$0.00");
        assert_eq!(summary.final_total().unwrap().display, "$0.01");
    }
}
