use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStep {
    Idle,
    SelectingService,
    SelectingDate,
    SelectingTime,
    Complete,
}

impl DialogueStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueStep::Idle => "idle",
            DialogueStep::SelectingService => "selecting_service",
            DialogueStep::SelectingDate => "selecting_date",
            DialogueStep::SelectingTime => "selecting_time",
            DialogueStep::Complete => "complete",
        }
    }
}

/// The guided-booking conversation state for one chat session: the current
/// step plus whatever fields have been captured so far. Exactly one session
/// exists per conversation id; nothing is shared across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueSession {
    pub step: DialogueStep,
    pub service: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub last_activity: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl DialogueSession {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            step: DialogueStep::Idle,
            service: None,
            date: None,
            time: None,
            last_activity: now,
            expires_at: now + chrono::Duration::minutes(30),
        }
    }
}
