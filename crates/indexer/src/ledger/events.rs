// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Values recovered from execution events.

use thiserror::Error;
use tracing::debug;

use super::types::Event;
use crate::consts::{ATTRIBUTE_AMOUNT, ATTRIBUTE_PROPOSAL_ID, EVENT_TYPE_PROPOSAL_DEPOSIT};
use crate::types::{Coin, parse_coins};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventParseError {
    #[error("No numeric 'proposal_id' in any 'proposal_deposit' event")]
    MissingProposalId,
}

/// Proposal id and initial deposit assigned by the ledger on submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProposalDeposit {
    pub proposal_id: Option<u64>,
    pub amount: Vec<Coin>,
}

impl ProposalDeposit {
    pub fn require_proposal_id(&self) -> Result<u64, EventParseError> {
        self.proposal_id.ok_or(EventParseError::MissingProposalId)
    }
}

/// Scan every `proposal_deposit` event in `events` for the proposal id and
/// deposit amount emitted by a proposal submission.
///
/// Attributes are read in order across all matching events and the last
/// usable value of each wins. A non-numeric id or an unparsable amount is
/// ignored, so one bad attribute never discards the other.
pub fn proposal_deposit_from_events(events: &[Event]) -> ProposalDeposit {
    let mut deposit = ProposalDeposit::default();

    let attributes = events
        .iter()
        .filter(|event| event.kind == EVENT_TYPE_PROPOSAL_DEPOSIT)
        .flat_map(|event| &event.attributes);

    for attr in attributes {
        match attr.key.as_str() {
            ATTRIBUTE_PROPOSAL_ID => match attr.value.trim().parse::<u64>() {
                Ok(id) => deposit.proposal_id = Some(id),
                Err(_) => debug!(value = %attr.value, "Ignoring non-numeric proposal id"),
            },
            ATTRIBUTE_AMOUNT if !attr.value.is_empty() => match parse_coins(&attr.value) {
                Ok(amount) => deposit.amount = amount,
                Err(err) => debug!(value = %attr.value, error = %err, "Ignoring deposit amount"),
            },
            _ => {}
        }
    }

    deposit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::Attribute;

    fn event(kind: &str, attrs: &[(&str, &str)]) -> Event {
        Event {
            kind: kind.to_string(),
            attributes: attrs
                .iter()
                .map(|(k, v)| Attribute {
                    key: k.to_string(),
                    value: v.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_recovers_id_and_amount() {
        let events = vec![
            event("message", &[("action", "submit_proposal")]),
            event(
                "proposal_deposit",
                &[("amount", "10stake"), ("proposal_id", "7")],
            ),
        ];

        let deposit = proposal_deposit_from_events(&events);
        assert_eq!(deposit.require_proposal_id(), Ok(7));
        assert_eq!(deposit.amount, vec![Coin::new("stake", 10)]);
    }

    #[test]
    fn test_empty_amount_yields_no_coins() {
        let events = vec![event(
            "proposal_deposit",
            &[("amount", ""), ("proposal_id", "3")],
        )];
        let deposit = proposal_deposit_from_events(&events);
        assert_eq!(deposit.proposal_id, Some(3));
        assert!(deposit.amount.is_empty());
    }

    #[test]
    fn test_missing_event() {
        let events = vec![event("message", &[("proposal_id", "4")])];
        let deposit = proposal_deposit_from_events(&events);
        assert_eq!(deposit, ProposalDeposit::default());
        assert_eq!(
            deposit.require_proposal_id(),
            Err(EventParseError::MissingProposalId)
        );
    }

    #[test]
    fn test_non_numeric_id_keeps_amount() {
        let events = vec![event(
            "proposal_deposit",
            &[("amount", "1stake"), ("proposal_id", "seven")],
        )];
        let deposit = proposal_deposit_from_events(&events);
        assert_eq!(deposit.proposal_id, None);
        assert_eq!(deposit.amount, vec![Coin::new("stake", 1)]);
    }

    #[test]
    fn test_last_value_across_events_wins() {
        let events = vec![
            event(
                "proposal_deposit",
                &[("amount", "10stake"), ("proposal_id", "7")],
            ),
            event("transfer", &[("amount", "99uiris")]),
            event(
                "proposal_deposit",
                &[("amount", "25stake"), ("proposal_id", "8")],
            ),
            event(
                "proposal_deposit",
                &[("amount", ""), ("proposal_id", "nine")],
            ),
        ];
        let deposit = proposal_deposit_from_events(&events);
        assert_eq!(deposit.proposal_id, Some(8));
        assert_eq!(deposit.amount, vec![Coin::new("stake", 25)]);
    }
}
