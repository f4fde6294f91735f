//! Expense split engine.
//!
//! Turns a group of participants and what each of them spent into fair
//! shares, signed balances and a list of settlement transfers. All amounts
//! are integer [`Cents`], so shares always add back up to the exact total and
//! balances always sum to zero.

use tracing::info;

use crate::Cents;
use crate::model::{Group, Transfer};

mod balance;
pub use balance::{base_share, compute_balances, fair_shares};

mod position;

mod settlement;
pub use settlement::compute_settlement;

mod error;
pub use error::{EngineError, SettlementError};

/// Result of a full split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Sum of everything spent.
    pub total: Cents,
    /// Even share rounded down, before the remainder is handed out.
    pub average: Cents,
    /// Fair share of each participant, in group order.
    pub shares: Vec<Cents>,
    /// Transfers in the order the matching loop produced them.
    pub transfers: Vec<Transfer>,
}

/// Run the whole pipeline on `group`: validate it, compute fair shares, set
/// every participant's balance, then settle.
pub fn split(group: &mut Group) -> Result<Summary, EngineError> {
    group.validate()?;

    let total = group.total_spent();
    let count = group.len();
    let shares = fair_shares(total, count);

    compute_balances(group.participants_mut(), &shares)?;
    let transfers = compute_settlement(group.participants())?;

    info!(
        participants = count,
        total = %total,
        transfers = transfers.len(),
        "split computed"
    );

    Ok(Summary {
        total,
        average: base_share(total, count),
        shares,
        transfers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Config, GroupError, ParticipantId};

    // test utils

    fn group(spends: &[i64]) -> Group {
        let mut group = Group::new(Config::default());
        for (i, spent) in spends.iter().enumerate() {
            group
                .add(format!("P{}", i + 1), Cents::from_minor(*spent))
                .unwrap();
        }
        group
    }

    fn cents(values: &[i64]) -> Vec<Cents> {
        values.iter().copied().map(Cents::from_minor).collect()
    }

    fn balances(group: &Group) -> Vec<Cents> {
        group.participants().iter().map(|p| p.balance()).collect()
    }

    fn transfer(from: ParticipantId, to: ParticipantId, amount: i64) -> Transfer {
        Transfer {
            from,
            to,
            amount: Cents::from_minor(amount),
        }
    }

    // Scenarios

    #[test]
    fn two_people_one_paid_everything() {
        let mut group = group(&[1000, 0]);
        let summary = split(&mut group).unwrap();

        assert_eq!(summary.total, Cents::from_minor(1000));
        assert_eq!(summary.shares, cents(&[500, 500]));
        assert_eq!(balances(&group), cents(&[500, -500]));
        assert_eq!(summary.transfers, vec![transfer(2, 1, 500)]);
    }

    #[test]
    fn three_people_with_remainder() {
        let mut group = group(&[1000, 0, 0]);
        let summary = split(&mut group).unwrap();

        assert_eq!(summary.average, Cents::from_minor(333));
        assert_eq!(summary.shares, cents(&[334, 333, 333]));
        assert_eq!(balances(&group), cents(&[666, -333, -333]));
        assert_eq!(
            summary.transfers,
            vec![transfer(2, 1, 333), transfer(3, 1, 333)]
        );
    }

    #[test]
    fn equal_spending_needs_no_transfers() {
        let mut group = group(&[2500, 2500, 2500, 2500]);
        let summary = split(&mut group).unwrap();

        assert_eq!(balances(&group), cents(&[0, 0, 0, 0]));
        assert!(summary.transfers.is_empty());
    }

    #[test]
    fn nobody_spent_anything() {
        let mut group = group(&[0, 0, 0]);
        let summary = split(&mut group).unwrap();

        assert_eq!(summary.total, Cents::ZERO);
        assert_eq!(summary.shares, cents(&[0, 0, 0]));
        assert_eq!(balances(&group), cents(&[0, 0, 0]));
        assert!(summary.transfers.is_empty());
    }

    #[test]
    fn remainder_can_turn_a_payer_into_a_debtor() {
        // 1001 / 3 = 333 r 2: the first two owe one extra cent each
        let mut group = group(&[333, 334, 334]);
        let summary = split(&mut group).unwrap();

        assert_eq!(summary.shares, cents(&[334, 334, 333]));
        assert_eq!(balances(&group), cents(&[-1, 0, 1]));
        assert_eq!(summary.transfers, vec![transfer(1, 3, 1)]);
    }

    #[test]
    fn transfers_cover_each_original_balance() {
        let mut group = group(&[4321, 17, 0, 9999, 250, 1]);
        let summary = split(&mut group).unwrap();

        for participant in group.participants() {
            let paid: Cents = summary
                .transfers
                .iter()
                .filter(|t| t.from == participant.id())
                .map(|t| t.amount)
                .sum();
            let received: Cents = summary
                .transfers
                .iter()
                .filter(|t| t.to == participant.id())
                .map(|t| t.amount)
                .sum();
            assert_eq!(received - paid, participant.balance());
        }
        assert!(summary.transfers.len() < group.len());
    }

    // Validation

    #[test]
    fn single_participant_is_rejected() {
        let mut group = group(&[1000]);
        assert_eq!(
            split(&mut group),
            Err(EngineError::Group(GroupError::TooFew { count: 1, min: 2 }))
        );
    }

    #[test]
    fn empty_group_is_rejected() {
        let mut group = Group::new(Config::default());
        assert!(matches!(split(&mut group), Err(EngineError::Group(_))));
    }
}
