//! Utility modules for BookingBuddy

pub mod errors;
pub mod logging;

pub use errors::{BookingBuddyError, Result};
