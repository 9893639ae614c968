//! English date-time recognition
//!
//! Resolves freeform date expressions against a reference instant.
//! Handles absolute forms (ISO dates, `m/d/Y`, spelled-out months),
//! relative day words (today, tomorrow), offsets ("in 2 hours"),
//! weekday names, and an optional clock clause ("at 9am", "5:30 pm").
//! Bare "next week" resolves to a start/end range.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use regex::Regex;

use super::{DateTimeCandidate, DateTimeRecognizer, RecognizeError};

const VALUE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d %Y", "%d %B %Y"];

/// Date-time recognizer for the en-us locale
#[derive(Debug, Clone, Default)]
pub struct EnglishDateTimeRecognizer;

fn instant_candidate(when: NaiveDateTime) -> DateTimeCandidate {
    DateTimeCandidate {
        value: Some(when.format(VALUE_FORMAT).to_string()),
        ..Default::default()
    }
}

fn date_candidate(day: NaiveDate) -> DateTimeCandidate {
    DateTimeCandidate {
        value: Some(day.format(DATE_FORMAT).to_string()),
        ..Default::default()
    }
}

fn range_candidate(start: NaiveDateTime, end: NaiveDateTime) -> DateTimeCandidate {
    DateTimeCandidate {
        value: None,
        start: Some(start.format(VALUE_FORMAT).to_string()),
        end: Some(end.format(VALUE_FORMAT).to_string()),
    }
}

/// Extract a clock time like "at 9", "at 19:30" or "5 pm"
fn extract_clock(text: &str) -> Option<NaiveTime> {
    let at_pattern =
        Regex::new(r"\bat\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b").expect("static clock pattern");
    let meridiem_pattern =
        Regex::new(r"\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b").expect("static clock pattern");

    let caps = at_pattern
        .captures(text)
        .or_else(|| meridiem_pattern.captures(text))?;

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    match caps.get(3).map(|m| m.as_str()) {
        Some("pm") if hour < 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn find_weekday(text: &str) -> Option<Weekday> {
    const NAMES: [(&str, Weekday); 7] = [
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
    ];
    NAMES
        .iter()
        .find(|(name, _)| text.contains(name))
        .map(|(_, weekday)| *weekday)
}

/// Next occurrence of `target` strictly after `today`
fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let from = today.weekday().num_days_from_monday() as i64;
    let to = target.num_days_from_monday() as i64;
    let mut ahead = (to - from).rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }
    today + Duration::days(ahead)
}

impl DateTimeRecognizer for EnglishDateTimeRecognizer {
    fn recognize(
        &self,
        text: &str,
        reference: DateTime<Utc>,
    ) -> Result<Vec<DateTimeCandidate>, RecognizeError> {
        let reference = reference.naive_utc();
        let today = reference.date();
        let normalized = text.trim().to_lowercase().replace(',', "");

        // Absolute forms
        for format in DATETIME_FORMATS {
            if let Ok(when) = NaiveDateTime::parse_from_str(&normalized, format) {
                return Ok(vec![instant_candidate(when)]);
            }
        }
        for format in DATE_FORMATS {
            if let Ok(day) = NaiveDate::parse_from_str(&normalized, format) {
                return Ok(vec![date_candidate(day)]);
            }
        }

        // Offsets from the reference instant
        let offset_pattern = Regex::new(r"\bin\s+(\d+|an?)\s+(minute|hour|day|week)s?\b")
            .expect("static offset pattern");
        if let Some(caps) = offset_pattern.captures(&normalized) {
            // "an hour", "a week"
            let amount: i64 = match caps[1].parse() {
                Ok(amount) => amount,
                Err(_) if caps[1].starts_with('a') => 1,
                Err(_) => return Err(RecognizeError::NoDateTime),
            };
            let delta = match &caps[2] {
                "minute" => Duration::try_minutes(amount),
                "hour" => Duration::try_hours(amount),
                "day" => Duration::try_days(amount),
                _ => Duration::try_weeks(amount),
            };
            let when = delta
                .and_then(|delta| reference.checked_add_signed(delta))
                .ok_or(RecognizeError::NoDateTime)?;
            return Ok(vec![instant_candidate(when)]);
        }
        if normalized == "now" || normalized == "right now" {
            return Ok(vec![instant_candidate(reference)]);
        }

        // "next week" without a weekday is a range
        if normalized.contains("next week") {
            let start = next_weekday(today, Weekday::Mon)
                .and_hms_opt(0, 0, 0)
                .ok_or(RecognizeError::NoDateTime)?;
            return Ok(vec![range_candidate(start, start + Duration::weeks(1))]);
        }

        let clock = extract_clock(&normalized);
        let day = if normalized.contains("day after tomorrow") {
            Some(today + Duration::days(2))
        } else if normalized.contains("tomorrow") {
            Some(today + Duration::days(1))
        } else if normalized.contains("today") || normalized.contains("tonight") {
            Some(today)
        } else {
            find_weekday(&normalized).map(|weekday| next_weekday(today, weekday))
        };

        match (day, clock) {
            (Some(day), Some(time)) => Ok(vec![instant_candidate(day.and_time(time))]),
            (Some(day), None) if normalized.contains("tonight") => {
                let evening = day.and_hms_opt(20, 0, 0).ok_or(RecognizeError::NoDateTime)?;
                Ok(vec![instant_candidate(evening)])
            }
            (Some(day), None) => Ok(vec![date_candidate(day)]),
            // A bare clock time is ambiguous between today and tomorrow;
            // emit both and let the caller pick
            (None, Some(time)) => Ok(vec![
                instant_candidate(today.and_time(time)),
                instant_candidate((today + Duration::days(1)).and_time(time)),
            ]),
            (None, None) => Err(RecognizeError::NoDateTime),
        }
    }
}
