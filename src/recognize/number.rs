//! English number recognition
//!
//! Extracts numeric candidates from freeform text, accepting both digit
//! forms ("12") and compositional word forms ("twelve", "twenty one",
//! "a hundred and five"). Candidates are returned in order of appearance.

use regex::Regex;

use super::{NumberCandidate, NumberRecognizer, RecognizeError};

/// Number recognizer for the en-us locale
#[derive(Debug, Clone, Default)]
pub struct EnglishNumberRecognizer;

/// Classification of a single number word
enum WordKind {
    Unit(u32),
    Ten(u32),
    Hundred,
}

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

fn classify(word: &str) -> Option<WordKind> {
    if let Some(n) = UNITS.iter().position(|u| *u == word) {
        return Some(WordKind::Unit(n as u32));
    }
    if let Some(n) = TENS.iter().position(|t| *t == word) {
        return Some(WordKind::Ten((n as u32 + 2) * 10));
    }
    (word == "hundred").then_some(WordKind::Hundred)
}

/// An in-progress run of adjacent number words
struct WordRun {
    words: Vec<String>,
    value: f64,
}

impl WordRun {
    fn new() -> Self {
        Self {
            words: Vec::new(),
            value: 0.0,
        }
    }

    fn push(&mut self, word: &str, kind: &WordKind) {
        match kind {
            WordKind::Unit(n) | WordKind::Ten(n) => self.value += f64::from(*n),
            WordKind::Hundred => {
                self.value = if self.value == 0.0 {
                    100.0
                } else {
                    self.value * 100.0
                };
            }
        }
        self.words.push(word.to_string());
    }
}

fn flush(run: &mut Option<WordRun>, candidates: &mut Vec<NumberCandidate>) {
    if let Some(run) = run.take() {
        candidates.push(NumberCandidate {
            text: run.words.join(" "),
            value: run.value,
        });
    }
}

impl NumberRecognizer for EnglishNumberRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<NumberCandidate>, RecognizeError> {
        let token_pattern = Regex::new(r"[a-z]+|\d+(?:\.\d+)?").expect("static token pattern");
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = token_pattern.find_iter(&lower).map(|m| m.as_str()).collect();

        let mut candidates = Vec::new();
        let mut run: Option<WordRun> = None;

        for (i, token) in tokens.iter().enumerate() {
            if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                flush(&mut run, &mut candidates);
                if let Ok(value) = token.parse::<f64>() {
                    candidates.push(NumberCandidate {
                        text: (*token).to_string(),
                        value,
                    });
                }
                continue;
            }

            if let Some(kind) = classify(token) {
                run.get_or_insert_with(WordRun::new).push(token, &kind);
                continue;
            }

            // "a hundred" starts a run; "and" joins the parts of a
            // hundreds expression ("a hundred and five")
            let starts_hundred = *token == "a" && tokens.get(i + 1) == Some(&"hundred");
            let joins_run = *token == "and"
                && run.as_ref().is_some_and(|r| r.value >= 100.0)
                && tokens.get(i + 1).is_some_and(|next| classify(next).is_some());

            if starts_hundred {
                flush(&mut run, &mut candidates);
                let mut started = WordRun::new();
                started.value = 1.0;
                started.words.push((*token).to_string());
                run = Some(started);
            } else if joins_run {
                if let Some(run) = run.as_mut() {
                    run.words.push((*token).to_string());
                }
            } else {
                flush(&mut run, &mut candidates);
            }
        }
        flush(&mut run, &mut candidates);

        if candidates.is_empty() {
            return Err(RecognizeError::NoNumber);
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn recognize(text: &str) -> Result<Vec<NumberCandidate>, RecognizeError> {
        EnglishNumberRecognizer.recognize(text)
    }

    fn values(text: &str) -> Vec<f64> {
        recognize(text).unwrap().iter().map(|c| c.value).collect()
    }

    #[test]
    fn test_digit_forms() {
        assert_eq!(values("12"), vec![12.0]);
        assert_eq!(values("I am 36 years old"), vec![36.0]);
        assert_eq!(values("between 10 and 20"), vec![10.0, 20.0]);
    }

    #[test]
    fn test_word_forms() {
        assert_eq!(values("twelve"), vec![12.0]);
        assert_eq!(values("twenty"), vec![20.0]);
        assert_eq!(values("twenty one"), vec![21.0]);
        assert_eq!(values("twenty-one"), vec![21.0]);
        assert_eq!(values("I'm thirty six"), vec![36.0]);
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(values("a hundred"), vec![100.0]);
        assert_eq!(values("a hundred and five"), vec![105.0]);
        assert_eq!(values("one hundred twenty"), vec![120.0]);
    }

    #[test]
    fn test_separate_runs() {
        assert_eq!(values("one and two"), vec![1.0, 2.0]);
    }

    #[test]
    fn test_matched_text() {
        let candidates = recognize("about twenty one people").unwrap();
        assert_eq!(candidates[0].text, "twenty one");
    }

    #[test]
    fn test_nothing_numeric() {
        assert_matches!(recognize("hello there"), Err(RecognizeError::NoNumber));
        assert_matches!(recognize(""), Err(RecognizeError::NoNumber));
    }
}
