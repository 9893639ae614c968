//! Booking dialogue: state machine, validators and turn handler

pub mod flow;
pub mod turn;
pub mod validators;

pub use flow::{ConversationFlow, Question, UserProfile};
pub use turn::run_turn;
pub use validators::Validation;
