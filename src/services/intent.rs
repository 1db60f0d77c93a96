use crate::models::{AssistantAction, AssistantReply, Intent};
use crate::services::dialogue::TIME_SLOTS;
use chrono::NaiveDate;

/// Ordered keyword table. The first intent with any matching keyword wins,
/// so an input hitting several sets resolves to the earliest entry.
const INTENT_TABLE: [(Intent, &[&str]); 8] = [
    (Intent::Booking, &["book", "appointment", "schedule", "reserve"]),
    (
        Intent::Services,
        &["service", "what do you offer", "what can i get"],
    ),
    (Intent::Availability, &["available", "slot", "time", "when"]),
    (Intent::Cancellation, &["cancel", "refund", "reschedule"]),
    (Intent::Products, &["product", "buy", "purchase", "shop"]),
    (
        Intent::Consultation,
        &["expert", "consultation", "advice", "help with style"],
    ),
    (Intent::Location, &["location", "where", "address", "branch"]),
    (Intent::Pricing, &["price", "cost", "how much", "rate"]),
];

pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    for (intent, keywords) in INTENT_TABLE {
        if keywords.iter().any(|k| lower.contains(k)) {
            return intent;
        }
    }
    Intent::Fallback
}

/// Static response template for each intent: reply text, suggestion chips,
/// and declarative actions. `today` only feeds the availability stub.
pub fn respond(intent: Intent, today: NaiveDate) -> AssistantReply {
    match intent {
        Intent::Booking => AssistantReply::text(
            "I can help you book an appointment! We offer various services:\n\n\
             - Haircut - ₹500 (30 mins)\n\
             - Beard Trim - ₹300 (20 mins)\n\
             - Hair Spa - ₹1200 (60 mins)\n\
             - Facial - ₹900 (45 mins)\n\
             - Hair Color - ₹1500 (90 mins)\n\n\
             Would you like to see available time slots?",
        )
        .with_suggestions(&[
            "Show available slots",
            "Tell me more about Hair Spa",
            "Book Haircut",
        ])
        .with_action(AssistantAction::Navigate {
            url: "/services".to_string(),
        }),

        Intent::Services => AssistantReply::text(
            "We offer 8 premium salon services:\n\n\
             Hair Services:\n\
             - Haircut - ₹500 (30 mins)\n\
             - Beard Trim - ₹300 (20 mins)\n\
             - Hair Color - ₹1500 (90 mins)\n\
             - Hair Spa - ₹1200 (60 mins)\n\n\
             Special Treatments:\n\
             - Facial - ₹900 (45 mins)\n\
             - Head Massage - ₹400 (20 mins)\n\
             - Keratin Treatment - ₹2500 (120 mins)\n\
             - Manicure & Pedicure - ₹700 (50 mins)\n\n\
             Which service interests you?",
        )
        .with_suggestions(&["Book now", "Show prices", "Check availability"])
        .with_action(AssistantAction::Navigate {
            url: "/services".to_string(),
        }),

        Intent::Availability => {
            let slots: Vec<String> = TIME_SLOTS.iter().map(|s| s.to_string()).collect();
            let listing = slots
                .iter()
                .map(|s| format!("- {s}"))
                .collect::<Vec<_>>()
                .join("\n");
            AssistantReply::text(format!(
                "We have the following slots available today ({}):\n\n{listing}\n\nWhich time works best for you?",
                today.format("%-m/%-d/%Y"),
            ))
            .with_suggestions(&["Book 10:00 AM", "Book 2:00 PM", "Show tomorrow's slots"])
            .with_action(AssistantAction::ShowSlots { date: today, slots })
        }

        Intent::Cancellation => AssistantReply::text(
            "To cancel your booking:\n\n\
             1. Go to 'My Bookings' page\n\
             2. Find your pending booking\n\
             3. Click the 'Cancel' button\n\
             4. Confirm cancellation\n\n\
             Note: You can only cancel pending bookings. Confirmed bookings may require contacting us.\n\n\
             Would you like me to take you to your bookings?",
        )
        .with_suggestions(&[
            "Go to My Bookings",
            "Contact support",
            "View cancellation policy",
        ])
        .with_action(AssistantAction::Navigate {
            url: "/bookings".to_string(),
        }),

        Intent::Products => AssistantReply::text(
            "We offer premium salon products:\n\n\
             Hair Care:\n\
             - Professional shampoos & conditioners\n\
             - Hair oils & serums\n\
             - Hair masks & treatments\n\n\
             Beard Care:\n\
             - Beard oils & balms\n\
             - Grooming kits\n\n\
             Styling:\n\
             - Hair gels & waxes\n\
             - Styling sprays\n\
             - Heat protection products\n\n\
             All products are available for purchase at our salons!",
        )
        .with_suggestions(&[
            "See all products",
            "Book appointment",
            "Ask about specific product",
        ]),

        Intent::Consultation => AssistantReply::text(
            "Our expert stylists offer personalized consultations!\n\n\
             We can help with:\n\
             - Hair & scalp analysis\n\
             - Style recommendations based on face shape\n\
             - Product suggestions for your hair type\n\
             - Treatment plans for hair concerns\n\
             - Color consultation\n\n\
             Consultations are complimentary with any service booking.\n\n\
             Would you like to book a consultation?",
        )
        .with_suggestions(&["Book consultation", "Tell me more", "See expert profiles"])
        .with_action(AssistantAction::Navigate {
            url: "/services".to_string(),
        }),

        Intent::Location => AssistantReply::text(
            "We have salons at the following locations:\n\n\
             Maryland City, MD, USA\n\
             Glow & Glam Studio - 4.9 (255 reviews)\n\n\
             New Jersey, USA\n\
             The Velvet Touch - 4.7 (180 reviews)\n\n\
             California, USA\n\
             Aura Luxe Salon - 4.5 (320 reviews)\n\n\
             Texas, USA\n\
             Multiple locations - 4.8 (280 reviews)\n\n\
             Which location would you like to visit?",
        )
        .with_suggestions(&["Book at Maryland", "Book at California", "See all locations"]),

        Intent::Pricing => AssistantReply::text(
            "Here's our complete pricing:\n\n\
             Basic Services:\n\
             - Haircut - ₹500\n\
             - Beard Trim - ₹300\n\
             - Head Massage - ₹400\n\n\
             Premium Services:\n\
             - Hair Spa - ₹1200\n\
             - Facial - ₹900\n\
             - Manicure & Pedicure - ₹700\n\n\
             Special Treatments:\n\
             - Hair Color - ₹1500\n\
             - Keratin Treatment - ₹2500\n\n\
             We also offer package deals with 20-30% discounts!\n\n\
             Interested in any specific service?",
        )
        .with_suggestions(&["See packages", "Book service", "Compare prices"]),

        Intent::Fallback => AssistantReply::text(
            "I'm your salon booking assistant! I can help you with:\n\n\
             - Booking appointments\n\
             - Exploring our services\n\
             - Checking available time slots\n\
             - Canceling or rescheduling bookings\n\
             - Product information\n\
             - Expert consultations\n\
             - Finding our locations\n\
             - Pricing details\n\n\
             What would you like to know?",
        )
        .with_suggestions(&[
            "Book appointment",
            "See services",
            "Check availability",
            "View locations",
        ]),
    }
}
