use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Booking,
    Services,
    Availability,
    Cancellation,
    Products,
    Consultation,
    Location,
    Pricing,
    Fallback,
}

/// A declarative hint to the rendering layer, attached to some responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistantAction {
    Navigate { url: String },
    ShowSlots { date: NaiveDate, slots: Vec<String> },
}

/// The synthetic confirmation emitted when the guided-booking flow completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub service: String,
    pub date: NaiveDate,
    pub time: String,
}

/// One assistant turn: the reply text, suggestion chips the user can tap,
/// optional declarative actions, and the booking confirmation when the
/// guided flow just completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub actions: Vec<AssistantAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingConfirmation>,
}

impl AssistantReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggestions: Vec::new(),
            actions: Vec::new(),
            booking: None,
        }
    }

    pub fn with_suggestions(mut self, suggestions: &[&str]) -> Self {
        self.suggestions = suggestions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_action(mut self, action: AssistantAction) -> Self {
        self.actions.push(action);
        self
    }
}
