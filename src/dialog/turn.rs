//! Turn handler for the booking conversation
//!
//! One inbound message in, ordered replies out. The handler matches the
//! question last asked, runs the corresponding validator, and either
//! stores the answer and asks the next question or re-asks the current
//! one. It holds no transport or storage handles; callers load and
//! persist state around it.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::dialog::flow::{ConversationFlow, Question, UserProfile};
use crate::dialog::validators::{self, Validation};
use crate::recognize::{DateTimeRecognizer, NumberRecognizer};

const ASK_NAME: &str = "Let's get started. What is your name?";
const ASK_AGE: &str = "How old are you?";
const ASK_DATE: &str = "When is your travel date?";
const RUN_AGAIN: &str = "Type anything to run the bot again.";
const FALLBACK: &str = "I'm sorry, I didn't understand that.";

/// Process one conversation turn
///
/// Mutates `flow` and `profile` in place and returns the outbound
/// messages in sending order. On a validation failure the state is left
/// unchanged so the same question is asked again; no failure here is
/// fatal.
pub fn run_turn(
    flow: &mut ConversationFlow,
    profile: &mut UserProfile,
    input: &str,
    now: DateTime<Utc>,
    numbers: &dyn NumberRecognizer,
    dates: &dyn DateTimeRecognizer,
) -> Vec<String> {
    let mut replies = Vec::new();

    match flow.last_question_asked {
        Question::None => {
            replies.push(ASK_NAME.to_string());
            flow.last_question_asked = Question::Name;
        }
        Question::Name => match validators::validate_name(input) {
            Validation::Valid(name) => {
                replies.push(format!("Hi {name}."));
                replies.push(ASK_AGE.to_string());
                profile.name = Some(name);
                flow.last_question_asked = Question::Age;
            }
            Validation::Invalid(message) => replies.push(or_fallback(message)),
        },
        Question::Age => match validators::validate_age(input, numbers) {
            Validation::Valid(age) => {
                replies.push(format!("I have your age as {age}."));
                replies.push(ASK_DATE.to_string());
                profile.age = Some(age);
                flow.last_question_asked = Question::Date;
            }
            Validation::Invalid(message) => replies.push(or_fallback(message)),
        },
        Question::Date => match validators::validate_date(input, now, dates) {
            Validation::Valid(date) => {
                profile.date = Some(date.clone());
                let name = profile.name.as_deref().unwrap_or("there");
                replies.push(format!("Your travel date is {date}."));
                replies.push(format!("Thanks for completing the booking {name}."));
                replies.push(RUN_AGAIN.to_string());
                *profile = UserProfile::default();
                flow.reset();
            }
            Validation::Invalid(message) => replies.push(or_fallback(message)),
        },
    }

    debug!(
        question = flow.last_question_asked.label(),
        replies = replies.len(),
        "Turn processed"
    );
    replies
}

fn or_fallback(message: String) -> String {
    if message.is_empty() {
        FALLBACK.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognize::{EnglishDateTimeRecognizer, EnglishNumberRecognizer};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap()
    }

    fn turn(flow: &mut ConversationFlow, profile: &mut UserProfile, input: &str) -> Vec<String> {
        run_turn(
            flow,
            profile,
            input,
            now(),
            &EnglishNumberRecognizer,
            &EnglishDateTimeRecognizer,
        )
    }

    #[test]
    fn test_first_turn_asks_name_regardless_of_input() {
        let mut flow = ConversationFlow::default();
        let mut profile = UserProfile::default();

        let replies = turn(&mut flow, &mut profile, "hello");
        assert_eq!(replies, vec![ASK_NAME.to_string()]);
        assert_eq!(flow.last_question_asked, Question::Name);
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_failed_validation_keeps_state() {
        let mut flow = ConversationFlow {
            last_question_asked: Question::Age,
        };
        let mut profile = UserProfile {
            name: Some("Amy".to_string()),
            ..Default::default()
        };

        let replies = turn(&mut flow, &mut profile, "15");
        assert_eq!(replies.len(), 1);
        assert!(replies[0].contains("between 18 and 120"));
        assert_eq!(flow.last_question_asked, Question::Age);
        assert_eq!(profile.age, None);
    }

    #[test]
    fn test_completion_resets_flow_and_profile() {
        let mut flow = ConversationFlow {
            last_question_asked: Question::Date,
        };
        let mut profile = UserProfile {
            name: Some("Amy".to_string()),
            age: Some(20),
            date: None,
        };

        let replies = turn(&mut flow, &mut profile, "tomorrow at 9am");
        assert_eq!(
            replies,
            vec![
                "Your travel date is 2026-08-25.".to_string(),
                "Thanks for completing the booking Amy.".to_string(),
                RUN_AGAIN.to_string(),
            ]
        );
        assert_eq!(flow.last_question_asked, Question::None);
        assert_eq!(profile, UserProfile::default());
    }
}
