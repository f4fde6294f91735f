use fair_split::engine::fair_shares;
use fair_split::{Cents, Config, Group, split};
use proptest::prelude::*;

fn group_from(spends: &[i64]) -> Group {
    let mut group = Group::new(Config::default());
    for (i, spent) in spends.iter().enumerate() {
        group
            .add(format!("P{}", i + 1), Cents::from_minor(*spent))
            .expect("valid participant");
    }
    group
}

proptest! {
    #[test]
    fn fair_shares_sum_to_total(total in 0i64..=10_000_000, count in 2usize..=9) {
        let shares = fair_shares(Cents::from_minor(total), count);
        prop_assert_eq!(shares.len(), count);
        prop_assert_eq!(shares.iter().sum::<Cents>(), Cents::from_minor(total));
    }

    #[test]
    fn remainder_goes_to_first_participants(total in 0i64..=10_000_000, count in 2usize..=9) {
        let shares = fair_shares(Cents::from_minor(total), count);
        let base = total / count as i64;
        let remainder = (total % count as i64) as usize;

        for (i, share) in shares.iter().enumerate() {
            let expected = if i < remainder { base + 1 } else { base };
            prop_assert_eq!(share.minor(), expected);
        }
    }

    #[test]
    fn balances_sum_to_zero(spends in prop::collection::vec(0i64..=1_000_000, 2..=9)) {
        let mut group = group_from(&spends);
        split(&mut group).expect("split failed");

        let total: Cents = group.participants().iter().map(|p| p.balance()).sum();
        prop_assert_eq!(total, Cents::ZERO);
    }

    #[test]
    fn transfers_settle_every_balance(spends in prop::collection::vec(0i64..=1_000_000, 2..=9)) {
        let mut group = group_from(&spends);
        let summary = split(&mut group).expect("split failed");

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

            if participant.balance().is_negative() {
                prop_assert_eq!(paid, -participant.balance());
                prop_assert_eq!(received, Cents::ZERO);
            } else {
                prop_assert_eq!(received, participant.balance());
                prop_assert_eq!(paid, Cents::ZERO);
            }
        }

        prop_assert!(summary.transfers.iter().all(|t| t.amount.is_positive()));
        prop_assert!(summary.transfers.len() < group.len());
    }
}
