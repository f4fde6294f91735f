//! Core domain types for the expense splitter.

use thiserror::Error;

use crate::Cents;

/// Participant identifier, 1-based in insertion order.
pub type ParticipantId = u32;

/// Limits applied to a run. Passed explicitly to everything that needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on the number of participants (the lower bound is always 2).
    pub max_people: usize,
    /// Maximum number of characters in a participant name.
    pub max_name_len: usize,
}

impl Config {
    pub const MIN_PEOPLE: usize = 2;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_people: 9,
            max_name_len: 9,
        }
    }
}

/// Errors raised while building or validating a [`Group`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("group is full ({0} participants)")]
    Full(usize),

    #[error("participant name must not be empty")]
    EmptyName,

    #[error("name '{name}' is longer than {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("{name} cannot have spent a negative amount ({spent})")]
    NegativeSpend { name: String, spent: Cents },

    #[error("adding {spent} for {name} makes the group total too large")]
    TotalTooLarge { name: String, spent: Cents },

    #[error("at least {min} participants are needed, got {count}")]
    TooFew { count: usize, min: usize },

    #[error("at most {max} participants are allowed, got {count}")]
    TooMany { count: usize, max: usize },
}

/// One person taking part in the split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    spent: Cents,
    balance: Cents,
}

impl Participant {
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spent(&self) -> Cents {
        self.spent
    }

    /// Spent minus fair share. Positive means the participant is owed money.
    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub(crate) fn set_balance(&mut self, balance: Cents) {
        self.balance = balance;
    }
}

/// Ordered, bounded collection of participants.
#[derive(Debug, Clone)]
pub struct Group {
    config: Config,
    participants: Vec<Participant>,
    next_id: ParticipantId,
}

impl Group {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            participants: Vec::with_capacity(config.max_people),
            next_id: 1,
        }
    }

    /// Add a participant and return its freshly assigned id.
    ///
    /// The running total of all spends must stay representable, so every
    /// later sum, share and balance is computed without overflow.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        spent: Cents,
    ) -> Result<ParticipantId, GroupError> {
        let name = name.into();

        if self.participants.len() >= self.config.max_people {
            return Err(GroupError::Full(self.config.max_people));
        }
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }
        if name.chars().count() > self.config.max_name_len {
            return Err(GroupError::NameTooLong {
                name,
                max: self.config.max_name_len,
            });
        }
        if spent.is_negative() {
            return Err(GroupError::NegativeSpend { name, spent });
        }
        if self.total_spent().checked_add(spent).is_none() {
            return Err(GroupError::TotalTooLarge { name, spent });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.participants.push(Participant {
            id,
            name,
            spent,
            balance: Cents::ZERO,
        });
        Ok(id)
    }

    /// Check the participant count is within `[2, max_people]`.
    pub fn validate(&self) -> Result<(), GroupError> {
        let count = self.participants.len();
        if count < Config::MIN_PEOPLE {
            return Err(GroupError::TooFew {
                count,
                min: Config::MIN_PEOPLE,
            });
        }
        if count > self.config.max_people {
            return Err(GroupError::TooMany {
                count,
                max: self.config.max_people,
            });
        }
        Ok(())
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub(crate) fn participants_mut(&mut self) -> &mut [Participant] {
        &mut self.participants
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn total_spent(&self) -> Cents {
        self.participants.iter().map(Participant::spent).sum()
    }
}

/// A payment from a debtor to a creditor produced by the settlement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// The paying participant (debtor).
    pub from: ParticipantId,
    /// The receiving participant (creditor).
    pub to: ParticipantId,
    pub amount: Cents,
}
