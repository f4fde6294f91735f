//! Fair shares and balances.

use crate::Cents;
use crate::model::Participant;

use super::EngineError;

/// Even share of `total` among `count` people, rounded down.
pub fn base_share(total: Cents, count: usize) -> Cents {
    if count == 0 {
        return Cents::ZERO;
    }
    Cents::from_minor(total.minor().div_euclid(count as i64))
}

/// Split `total` into `count` shares that add back up to exactly `total`.
///
/// Every share is `floor(total / count)`; the `total mod count` minor units
/// left over go one each to the first participants in group order.
pub fn fair_shares(total: Cents, count: usize) -> Vec<Cents> {
    if count == 0 {
        return Vec::new();
    }
    let base = base_share(total, count);
    let remainder = total.minor().rem_euclid(count as i64) as usize;

    (0..count)
        .map(|i| {
            if i < remainder {
                base + Cents::from_minor(1)
            } else {
                base
            }
        })
        .collect()
}

/// Set each participant's balance to `spent - share`.
pub fn compute_balances(
    participants: &mut [Participant],
    shares: &[Cents],
) -> Result<(), EngineError> {
    if participants.len() != shares.len() {
        return Err(EngineError::ShareCountMismatch {
            expected: participants.len(),
            actual: shares.len(),
        });
    }

    for (participant, share) in participants.iter_mut().zip(shares) {
        let balance = participant.spent() - *share;
        participant.set_balance(balance);
    }
    Ok(())
}
