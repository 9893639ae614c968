//! Dialogue flow data model
//!
//! This module defines the persisted records driving the booking
//! conversation: which question was last asked (per conversation) and the
//! profile fields collected so far (per user). Both are serialized to the
//! state store between turns.

use serde::{Deserialize, Serialize};

/// The question most recently asked of the user
///
/// The flow advances strictly forward around the cycle
/// `None -> Name -> Age -> Date -> None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Question {
    #[default]
    None,
    Name,
    Age,
    Date,
}

impl Question {
    /// Label used in structured log events
    pub fn label(&self) -> &'static str {
        match self {
            Question::None => "none",
            Question::Name => "name",
            Question::Age => "age",
            Question::Date => "date",
        }
    }
}

/// Per-conversation dialogue state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationFlow {
    pub last_question_asked: Question,
}

impl ConversationFlow {
    /// Return the flow to its initial state
    pub fn reset(&mut self) {
        self.last_question_asked = Question::None;
    }
}

/// Per-user profile collected by the flow
///
/// Fields are populated strictly in the order name -> age -> date and the
/// whole record is replaced with a fresh default once the cycle completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub date: Option<String>,
}
