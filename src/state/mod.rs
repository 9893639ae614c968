//! Conversation state persistence

pub mod storage;

pub use storage::StateStorage;
