pub mod amount;
pub mod csv;
pub mod engine;
pub mod model;
pub mod prompt;
pub mod report;

pub use amount::Cents;
pub use engine::{Summary, split};
pub use model::{Config, Group, Participant, ParticipantId, Transfer};
