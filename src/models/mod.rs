pub mod assistant;
pub mod booking;
pub mod dialogue;
pub mod service;

pub use assistant::{AssistantAction, AssistantReply, BookingConfirmation, Intent};
pub use booking::{Booking, BookingStatus};
pub use dialogue::{DialogueSession, DialogueStep};
pub use service::{Service, ServiceFilter, SortKey};
