use crate::Cents;
use crate::model::{Participant, ParticipantId};

/// Working copy of a participant's balance while transfers are being matched.
/// The participant itself is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    /// Index of the participant in group order, used as sort tie-break.
    pub index: usize,
    pub id: ParticipantId,
    pub remaining: Cents,
}

impl Position {
    pub fn new(index: usize, participant: &Participant) -> Self {
        Self {
            index,
            id: participant.id(),
            remaining: participant.balance(),
        }
    }

    /// Creditor side: an incoming transfer lowers what is still owed.
    pub fn receive(&mut self, amount: Cents) {
        self.remaining -= amount;
    }

    /// Debtor side: an outgoing transfer moves the balance up toward zero.
    pub fn pay(&mut self, amount: Cents) {
        self.remaining += amount;
    }

    pub fn is_settled(&self) -> bool {
        self.remaining.is_zero()
    }
}
