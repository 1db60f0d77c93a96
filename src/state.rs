use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::models::DialogueSession;
use crate::store::{BookingStore, ServiceCatalog};

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<dyn ServiceCatalog>,
    pub bookings: Arc<dyn BookingStore>,
    pub sessions: Mutex<HashMap<String, DialogueSession>>,
}
