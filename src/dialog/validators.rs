//! Field validators for the booking flow
//!
//! Three independent validators parse freeform input into typed values.
//! Each returns a tagged `Validation` result carrying either the parsed
//! value or a user-facing message; validation failures are never errors,
//! the caller simply re-asks the question.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::recognize::{DateTimeRecognizer, NumberRecognizer};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 120;

pub(crate) const NAME_MESSAGE: &str = "Please enter a name that contains at least one character.";
pub(crate) const AGE_RANGE_MESSAGE: &str = "Please enter an age between 18 and 120.";
pub(crate) const AGE_UNINTERPRETABLE_MESSAGE: &str =
    "I'm sorry, I could not interpret that as an age.";
pub(crate) const DATE_RANGE_MESSAGE: &str =
    "I'm sorry, please enter a date at least an hour out.";
pub(crate) const DATE_UNINTERPRETABLE_MESSAGE: &str =
    "I'm sorry, I could not interpret that as an appropriate date.";

const RESOLUTION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Outcome of validating one answer
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    Valid(T),
    Invalid(String),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    fn invalid(message: &str) -> Self {
        Validation::Invalid(message.to_string())
    }
}

/// Validate a name: any non-blank text, trimmed
pub fn validate_name(input: &str) -> Validation<String> {
    let name = input.trim();
    if name.is_empty() {
        Validation::invalid(NAME_MESSAGE)
    } else {
        Validation::Valid(name.to_string())
    }
}

/// Validate an age: the first recognized number within [18, 120]
///
/// Word forms are accepted alongside digits, so "twenty" works as well
/// as "20". Candidates are tried in recognizer order.
pub fn validate_age(input: &str, numbers: &dyn NumberRecognizer) -> Validation<i64> {
    let candidates = match numbers.recognize(input) {
        Ok(candidates) => candidates,
        Err(_) => return Validation::invalid(AGE_UNINTERPRETABLE_MESSAGE),
    };

    for candidate in candidates {
        let age = candidate.value.trunc() as i64;
        if (MIN_AGE..=MAX_AGE).contains(&age) {
            return Validation::Valid(age);
        }
    }
    Validation::invalid(AGE_RANGE_MESSAGE)
}

/// Validate a travel date: the first resolution at least an hour out
///
/// For range resolutions the start instant is considered. The accepted
/// date is returned formatted as `%Y-%m-%d`.
pub fn validate_date(
    input: &str,
    now: DateTime<Utc>,
    dates: &dyn DateTimeRecognizer,
) -> Validation<String> {
    let candidates = match dates.recognize(input, now) {
        Ok(candidates) => candidates,
        Err(_) => return Validation::invalid(DATE_UNINTERPRETABLE_MESSAGE),
    };

    let floor = now.naive_utc() + Duration::hours(1);
    for candidate in candidates {
        let resolution = match candidate.value.as_deref().or(candidate.start.as_deref()) {
            Some(resolution) => resolution,
            None => continue,
        };
        let when = match parse_resolution(resolution) {
            Some(when) => when,
            None => continue,
        };
        if when > floor {
            return Validation::Valid(when.date().format(DATE_ONLY_FORMAT).to_string());
        }
    }
    Validation::invalid(DATE_RANGE_MESSAGE)
}

fn parse_resolution(resolution: &str) -> Option<NaiveDateTime> {
    if let Ok(when) = NaiveDateTime::parse_from_str(resolution, RESOLUTION_FORMAT) {
        return Some(when);
    }
    NaiveDate::parse_from_str(resolution, DATE_ONLY_FORMAT)
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognize::{EnglishDateTimeRecognizer, EnglishNumberRecognizer};
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_name_rejects_blank_input() {
        assert_matches!(validate_name(""), Validation::Invalid(msg) if msg == NAME_MESSAGE);
        assert_matches!(validate_name("   "), Validation::Invalid(_));
        assert_matches!(validate_name("\t\n"), Validation::Invalid(_));
    }

    #[test]
    fn test_name_trims() {
        assert_eq!(
            validate_name("  Amy  "),
            Validation::Valid("Amy".to_string())
        );
    }

    #[test]
    fn test_age_bounds() {
        let numbers = EnglishNumberRecognizer;
        assert_matches!(validate_age("17", &numbers), Validation::Invalid(msg) if msg == AGE_RANGE_MESSAGE);
        assert_eq!(validate_age("18", &numbers), Validation::Valid(18));
        assert_eq!(validate_age("120", &numbers), Validation::Valid(120));
        assert_matches!(validate_age("121", &numbers), Validation::Invalid(msg) if msg == AGE_RANGE_MESSAGE);
    }

    #[test]
    fn test_age_word_forms() {
        let numbers = EnglishNumberRecognizer;
        assert_eq!(validate_age("twenty", &numbers), Validation::Valid(20));
        assert_eq!(validate_age("I'm thirty six", &numbers), Validation::Valid(36));
    }

    #[test]
    fn test_age_first_in_range_candidate_wins() {
        let numbers = EnglishNumberRecognizer;
        // 5 is out of range, 30 is the first acceptable candidate
        assert_eq!(
            validate_age("5 or maybe 30 or 40", &numbers),
            Validation::Valid(30)
        );
    }

    #[test]
    fn test_age_uninterpretable() {
        let numbers = EnglishNumberRecognizer;
        assert_matches!(
            validate_age("no idea", &numbers),
            Validation::Invalid(msg) if msg == AGE_UNINTERPRETABLE_MESSAGE
        );
    }

    #[test]
    fn test_date_accepts_future() {
        let dates = EnglishDateTimeRecognizer;
        assert_eq!(
            validate_date("tomorrow at 9am", now(), &dates),
            Validation::Valid("2026-08-25".to_string())
        );
        assert_eq!(
            validate_date("2026-09-05", now(), &dates),
            Validation::Valid("2026-09-05".to_string())
        );
    }

    #[test]
    fn test_date_rejects_less_than_an_hour_out() {
        let dates = EnglishDateTimeRecognizer;
        assert_matches!(
            validate_date("in 30 minutes", now(), &dates),
            Validation::Invalid(msg) if msg == DATE_RANGE_MESSAGE
        );
        assert_matches!(
            validate_date("now", now(), &dates),
            Validation::Invalid(msg) if msg == DATE_RANGE_MESSAGE
        );
    }

    #[test]
    fn test_date_range_resolution_uses_start() {
        let dates = EnglishDateTimeRecognizer;
        // Reference Monday 2026-08-24, so next week starts the 31st
        assert_eq!(
            validate_date("next week", now(), &dates),
            Validation::Valid("2026-08-31".to_string())
        );
    }

    #[test]
    fn test_date_ambiguous_clock_picks_future_candidate() {
        let dates = EnglishDateTimeRecognizer;
        // 5pm today is more than an hour from the midday reference
        assert_eq!(
            validate_date("at 5pm", now(), &dates),
            Validation::Valid("2026-08-24".to_string())
        );
        // 11am has passed today, only the tomorrow candidate qualifies
        assert_eq!(
            validate_date("at 11am", now(), &dates),
            Validation::Valid("2026-08-25".to_string())
        );
    }

    #[test]
    fn test_date_uninterpretable() {
        let dates = EnglishDateTimeRecognizer;
        assert_matches!(
            validate_date("what a lovely idea", now(), &dates),
            Validation::Invalid(msg) if msg == DATE_UNINTERPRETABLE_MESSAGE
        );
    }
}
