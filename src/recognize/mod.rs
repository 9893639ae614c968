//! Natural-language recognizers
//!
//! This module converts freeform user text into structured candidate
//! interpretations: numbers ("12", "twenty one") and date-times
//! ("tomorrow at 9am", "2026-09-05"). The validators consume candidates
//! in order and decide which one, if any, is acceptable.
//!
//! Date-time resolutions are rendered as strings and re-parsed by the
//! caller, so a candidate can carry either a single resolved instant
//! (`value`) or a `start`/`end` pair for range expressions like
//! "next week".

pub mod datetime;
pub mod number;

pub use datetime::EnglishDateTimeRecognizer;
pub use number::EnglishNumberRecognizer;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised when no structured interpretation can be extracted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizeError {
    #[error("no numeric value recognized in input")]
    NoNumber,

    #[error("no date or time recognized in input")]
    NoDateTime,
}

/// A candidate numeric interpretation of a span of the input
#[derive(Debug, Clone, PartialEq)]
pub struct NumberCandidate {
    /// The matched span as it appeared in the input
    pub text: String,
    /// Resolved numeric value
    pub value: f64,
}

/// A candidate date-time interpretation
///
/// Exactly one of `value` or `start` is populated. Resolutions use
/// `%Y-%m-%d %H:%M:%S`, or `%Y-%m-%d` when the expression carries no
/// time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeCandidate {
    pub value: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Recognizes numbers in freeform text
pub trait NumberRecognizer {
    /// Return candidate numeric interpretations in order of appearance
    fn recognize(&self, text: &str) -> std::result::Result<Vec<NumberCandidate>, RecognizeError>;
}

/// Recognizes dates and times in freeform text
pub trait DateTimeRecognizer {
    /// Return candidate date-time interpretations, resolving relative
    /// expressions against `reference`
    fn recognize(
        &self,
        text: &str,
        reference: DateTime<Utc>,
    ) -> std::result::Result<Vec<DateTimeCandidate>, RecognizeError>;
}

/// The recognizer implementations handed to the dialogue handlers
#[derive(Debug, Clone, Default)]
pub struct RecognizerSet {
    pub numbers: EnglishNumberRecognizer,
    pub dates: EnglishDateTimeRecognizer,
}
