//! Greedy debtor/creditor matching.

use tracing::debug;

use crate::Cents;
use crate::model::{Participant, Transfer};

use super::SettlementError;
use super::position::Position;

/// Produce the transfers that bring every balance to zero.
///
/// Creditors are matched largest first and debtors most negative first, ties
/// broken by group order. Each step moves the smaller of the two outstanding
/// amounts and retires at least one side, so at most `n - 1` transfers are
/// emitted. Transfers come out in matching order.
///
/// Participants are only read; matching happens on working copies.
pub fn compute_settlement(participants: &[Participant]) -> Result<Vec<Transfer>, SettlementError> {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();

    for (index, participant) in participants.iter().enumerate() {
        let position = Position::new(index, participant);
        if position.remaining.is_positive() {
            creditors.push(position);
        } else if position.remaining.is_negative() {
            debtors.push(position);
        }
    }

    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining).then(a.index.cmp(&b.index)));
    debtors.sort_by(|a, b| a.remaining.cmp(&b.remaining).then(a.index.cmp(&b.index)));

    let mut transfers = Vec::with_capacity(creditors.len() + debtors.len());
    let mut c = 0;
    let mut d = 0;

    while c < creditors.len() && d < debtors.len() {
        let creditor = &mut creditors[c];
        let debtor = &mut debtors[d];

        let amount = creditor.remaining.min(-debtor.remaining);
        debug!(
            from = debtor.id,
            to = creditor.id,
            amount = %amount,
            "transfer scheduled"
        );
        transfers.push(Transfer {
            from: debtor.id,
            to: creditor.id,
            amount,
        });

        creditor.receive(amount);
        debtor.pay(amount);

        if creditor.is_settled() {
            c += 1;
        }
        if debtor.is_settled() {
            d += 1;
        }
    }

    let owed: Cents = creditors[c..].iter().map(|p| p.remaining).sum();
    let owing: Cents = debtors[d..].iter().map(|p| -p.remaining).sum();
    if !owed.is_zero() || !owing.is_zero() {
        return Err(SettlementError::Unbalanced {
            creditors: owed,
            debtors: owing,
        });
    }

    Ok(transfers)
}
