use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;

use crate::models::{AssistantReply, BookingConfirmation, DialogueSession, DialogueStep};

/// Fixed suggestion chips offered when the booking flow opens.
const SERVICE_SUGGESTIONS: [&str; 5] =
    ["Haircut", "Hair Spa", "Facial", "Beard Trim", "Hair Color"];

const DATE_SUGGESTIONS: [&str; 3] = ["Today", "Tomorrow", "This Weekend"];

/// The five slot strings offered for any date. Not a calendar lookup.
pub const TIME_SLOTS: [&str; 5] = ["10:00 AM", "11:30 AM", "2:00 PM", "4:00 PM", "6:30 PM"];

/// Free-text vocabulary for service selection, matched in order.
const SERVICE_VOCAB: [&str; 8] = [
    "haircut",
    "hair spa",
    "facial",
    "beard trim",
    "hair color",
    "manicure",
    "massage",
    "keratin",
];

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}):?(\d{2})?\s*(am|pm)").unwrap());

/// Advances the guided-booking conversation by one user message.
///
/// Pure step function: returns the successor session and the reply when the
/// input drives a transition (or opens the flow), `None` when the message is
/// not part of the booking flow — the caller then falls through to the
/// canned-intent responder with the session unchanged.
pub fn advance(
    session: &DialogueSession,
    input: &str,
    today: NaiveDate,
) -> Option<(DialogueSession, AssistantReply)> {
    let lower = input.to_lowercase();

    match session.step {
        DialogueStep::Idle | DialogueStep::Complete => {
            if lower.contains("book") || lower.contains("appointment") {
                let mut next = session.clone();
                next.step = DialogueStep::SelectingService;
                let reply = AssistantReply::text(
                    "Great! I'd love to help you book an appointment.\n\nWhich service would you like to book?",
                )
                .with_suggestions(&SERVICE_SUGGESTIONS);
                return Some((next, reply));
            }
            None
        }

        DialogueStep::SelectingService => {
            let matched = SERVICE_VOCAB.iter().find(|s| lower.contains(*s))?;
            let service = title_case(matched);

            let mut next = session.clone();
            next.step = DialogueStep::SelectingDate;
            next.service = Some(service.clone());
            let reply = AssistantReply::text(format!(
                "Perfect! {service} is an excellent choice.\n\nWhen would you like to come in?"
            ))
            .with_suggestions(&DATE_SUGGESTIONS);
            Some((next, reply))
        }

        DialogueStep::SelectingDate => {
            let date = resolve_date(&lower, today)?;

            let mut next = session.clone();
            next.step = DialogueStep::SelectingTime;
            next.date = Some(date);
            let formatted = date.format("%A, %B %-d").to_string();
            let reply = AssistantReply::text(format!(
                "Great choice! {formatted} works perfectly. What time would be best for you?"
            ))
            .with_suggestions(&TIME_SLOTS);
            Some((next, reply))
        }

        DialogueStep::SelectingTime => {
            // Matched against the lowercased text, so the stored time is the
            // lowercased substring ("4PM" comes back as "4pm").
            let time = TIME_PATTERN.find(&lower)?.as_str().to_string();

            let (service, date) = match (session.service.clone(), session.date) {
                (Some(service), Some(date)) => (service, date),
                // Should be unreachable: both fields are filled before this
                // step. Recover by restarting the flow.
                _ => {
                    let mut next = session.clone();
                    next.step = DialogueStep::Idle;
                    next.service = None;
                    next.date = None;
                    next.time = None;
                    let reply = AssistantReply::text(
                        "I'm sorry, something went wrong. Could you start over?",
                    );
                    return Some((next, reply));
                }
            };

            let mut next = session.clone();
            next.step = DialogueStep::Idle;
            next.service = None;
            next.date = None;
            next.time = None;

            let reply = AssistantReply {
                text: "Your appointment is all set!\n\nIs there anything else I can help you with?"
                    .to_string(),
                suggestions: vec![
                    "Book another appointment".to_string(),
                    "View my bookings".to_string(),
                    "Ask a question".to_string(),
                ],
                actions: Vec::new(),
                booking: Some(BookingConfirmation {
                    service,
                    date,
                    time,
                }),
            };
            Some((next, reply))
        }
    }
}

fn resolve_date(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    if lower.contains("today") {
        Some(today)
    } else if lower.contains("tomorrow") {
        Some(today + Duration::days(1))
    } else if lower.contains("weekend") {
        // The upcoming Saturday; today when it already is one.
        let days_until_saturday = 6 - today.weekday().num_days_from_sunday() as i64;
        Some(today + Duration::days(days_until_saturday))
    } else {
        None
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn session(step: DialogueStep) -> DialogueSession {
        DialogueSession {
            step,
            ..DialogueSession::new(chrono::NaiveDateTime::default())
        }
    }

    #[test]
    fn test_idle_book_request_opens_service_selection() {
        let idle = session(DialogueStep::Idle);
        let (next, reply) =
            advance(&idle, "I want to book an appointment", date("2025-06-16")).unwrap();

        assert_eq!(next.step, DialogueStep::SelectingService);
        assert_eq!(
            reply.suggestions,
            ["Haircut", "Hair Spa", "Facial", "Beard Trim", "Hair Color"]
        );
    }

    #[test]
    fn test_idle_other_text_is_not_handled() {
        let idle = session(DialogueStep::Idle);
        assert!(advance(&idle, "what are your prices?", date("2025-06-16")).is_none());
    }

    #[test]
    fn test_service_selection_stores_title_cased_service() {
        let selecting = session(DialogueStep::SelectingService);
        let (next, reply) =
            advance(&selecting, "I'd like a haircut please", date("2025-06-16")).unwrap();

        assert_eq!(next.step, DialogueStep::SelectingDate);
        assert_eq!(next.service.as_deref(), Some("Haircut"));
        assert_eq!(reply.suggestions, ["Today", "Tomorrow", "This Weekend"]);
    }

    #[test]
    fn test_multi_word_service_is_title_cased() {
        let selecting = session(DialogueStep::SelectingService);
        let (next, _) = advance(&selecting, "hair spa sounds nice", date("2025-06-16")).unwrap();
        assert_eq!(next.service.as_deref(), Some("Hair Spa"));
    }

    #[test]
    fn test_unmatched_service_keeps_state() {
        let selecting = session(DialogueStep::SelectingService);
        assert!(advance(&selecting, "a unicorn groom", date("2025-06-16")).is_none());
    }

    #[test]
    fn test_date_today_tomorrow() {
        let selecting = session(DialogueStep::SelectingDate);

        let (next, _) = advance(&selecting, "today works", date("2025-06-16")).unwrap();
        assert_eq!(next.step, DialogueStep::SelectingTime);
        assert_eq!(next.date, Some(date("2025-06-16")));

        let (next, _) = advance(&selecting, "tomorrow", date("2025-06-16")).unwrap();
        assert_eq!(next.date, Some(date("2025-06-17")));
    }

    #[test]
    fn test_date_weekend_resolves_to_next_saturday() {
        let selecting = session(DialogueStep::SelectingDate);

        // 2025-06-16 is a Monday; the upcoming Saturday is the 21st.
        let (next, _) = advance(&selecting, "this weekend", date("2025-06-16")).unwrap();
        assert_eq!(next.date, Some(date("2025-06-21")));

        // Already Saturday: stays on the same day.
        let (next, _) = advance(&selecting, "weekend please", date("2025-06-21")).unwrap();
        assert_eq!(next.date, Some(date("2025-06-21")));

        // Sunday rolls to the following Saturday.
        let (next, _) = advance(&selecting, "the weekend", date("2025-06-15")).unwrap();
        assert_eq!(next.date, Some(date("2025-06-21")));
    }

    #[test]
    fn test_time_slot_suggestions_follow_date() {
        let selecting = session(DialogueStep::SelectingDate);
        let (_, reply) = advance(&selecting, "tomorrow", date("2025-06-16")).unwrap();
        assert_eq!(reply.suggestions, TIME_SLOTS);
    }

    #[test]
    fn test_time_selection_completes_and_resets() {
        let mut selecting = session(DialogueStep::SelectingTime);
        selecting.service = Some("Haircut".to_string());
        selecting.date = Some(date("2025-06-17"));

        let (next, reply) = advance(&selecting, "2:00 pm", date("2025-06-16")).unwrap();

        assert_eq!(next.step, DialogueStep::Idle);
        assert_eq!(next.service, None);
        assert_eq!(next.date, None);

        let confirmation = reply.booking.unwrap();
        assert_eq!(confirmation.service, "Haircut");
        assert_eq!(confirmation.date, date("2025-06-17"));
        assert_eq!(confirmation.time, "2:00 pm");
    }

    #[test]
    fn test_time_is_extracted_verbatim() {
        let mut selecting = session(DialogueStep::SelectingTime);
        selecting.service = Some("Facial".to_string());
        selecting.date = Some(date("2025-06-17"));

        let (_, reply) = advance(&selecting, "let's say 4PM then", date("2025-06-16")).unwrap();
        assert_eq!(reply.booking.unwrap().time, "4pm");
    }

    #[test]
    fn test_unmatched_time_keeps_state() {
        let mut selecting = session(DialogueStep::SelectingTime);
        selecting.service = Some("Facial".to_string());
        selecting.date = Some(date("2025-06-17"));

        assert!(advance(&selecting, "sometime in the evening", date("2025-06-16")).is_none());
    }

    #[test]
    fn test_book_mid_flow_is_not_special_cased() {
        let selecting = session(DialogueStep::SelectingDate);
        assert!(advance(&selecting, "actually book something else", date("2025-06-16")).is_none());
    }
}
