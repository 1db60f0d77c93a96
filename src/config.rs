use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub demo_user_id: String,
    pub seed_demo_bookings: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            demo_user_id: env::var("DEMO_USER_ID").unwrap_or_else(|_| "123".to_string()),
            seed_demo_bookings: env::var("SEED_DEMO_BOOKINGS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
