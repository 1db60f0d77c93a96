use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A reservation of a service for a customer. Created with status `pending`;
/// the only exposed mutation is the `pending` -> `cancelled` transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,

    pub service_id: String,
    pub service_name: String,
    pub salon_name: Option<String>,
    pub salon_image: Option<String>,
    pub salon_location: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub gender: Option<String>,
    pub stylist: Option<String>,
    pub preferred_gender: Option<String>,
    pub service_category: Option<String>,

    pub date: NaiveDate,
    pub time: String,
    pub note: Option<String>,

    pub status: BookingStatus,

    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub discount: Option<i64>,

    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}
