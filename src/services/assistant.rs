use std::sync::Arc;

use chrono::{Duration, Local};

use crate::models::{AssistantReply, DialogueSession};
use crate::services::{dialogue, intent};
use crate::state::AppState;

/// Runs one assistant turn for a session: the guided-booking reducer gets
/// first refusal, anything it doesn't handle goes to the canned-intent
/// responder with the dialogue state left as it was.
pub fn process_message(state: &Arc<AppState>, session_id: &str, message: &str) -> AssistantReply {
    let now = Local::now().naive_local();
    let today = now.date();

    let session = {
        let mut sessions = state.sessions.lock().unwrap();
        sessions.retain(|_, s| s.expires_at > now);
        sessions
            .get(session_id)
            .cloned()
            .unwrap_or_else(|| DialogueSession::new(now))
    };

    let (next, reply) = match dialogue::advance(&session, message, today) {
        Some((next, reply)) => (next, reply),
        None => {
            let detected = intent::classify(message);
            tracing::info!(
                session = session_id,
                intent = ?detected,
                step = session.step.as_str(),
                "responding from intent table"
            );
            (session, intent::respond(detected, today))
        }
    };

    if let Some(confirmation) = &reply.booking {
        tracing::info!(
            session = session_id,
            service = %confirmation.service,
            date = %confirmation.date,
            time = %confirmation.time,
            "guided booking confirmed"
        );
    }

    let mut next = next;
    next.last_activity = now;
    next.expires_at = now + Duration::minutes(30);

    state
        .sessions
        .lock()
        .unwrap()
        .insert(session_id.to_string(), next);

    reply
}
