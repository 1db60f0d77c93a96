use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus};
use crate::state::AppState;

// GET /api/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct BookingsResponse {
    pub success: bool,
    pub data: Vec<Booking>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<BookingsResponse>, AppError> {
    let mut bookings = state.bookings.list().await?;

    if let Some(status) = query.status.as_deref() {
        let status = BookingStatus::from_str(status);
        bookings.retain(|b| b.status == status);
    }
    if let Some(user_id) = query.user_id.as_deref() {
        bookings.retain(|b| b.user_id == user_id);
    }

    Ok(Json(BookingsResponse {
        success: true,
        data: bookings,
    }))
}

// POST /api/bookings
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: Option<String>,
    pub service_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub note: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub gender: Option<String>,
    pub stylist: Option<String>,
    pub preferred_gender: Option<String>,
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub data: Booking,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let service_id = require(&body.service_id, "service")?;
    let date_str = require(&body.date, "date")?;
    let time = require(&body.time, "time")?;

    // The contact fields travel together: the richer booking form submits
    // all of them, the quick form none.
    if body.first_name.is_some() || body.email.is_some() || body.phone.is_some() {
        require(&body.first_name, "first name")?;
        require(&body.email, "email")?;
        require(&body.phone, "phone")?;
    }

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("date must be formatted YYYY-MM-DD".to_string()))?;

    let service = state
        .catalog
        .find_by_id(&service_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("service {service_id}")))?;

    let booking = Booking {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: body
            .user_id
            .unwrap_or_else(|| state.config.demo_user_id.clone()),
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        salon_name: service.salon_name.clone(),
        salon_image: None,
        salon_location: service.location.clone(),
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone: body.phone,
        gender: body.gender,
        stylist: body.stylist,
        preferred_gender: body.preferred_gender,
        service_category: service.category.clone(),
        date,
        time,
        note: body.note,
        status: BookingStatus::Pending,
        price: Some(service.price),
        original_price: Some(service.price),
        discount: None,
        created_at: Utc::now().naive_utc(),
    };

    let created = state.bookings.append(booking).await?;

    tracing::info!(
        booking = %created.id,
        service = %created.service_name,
        date = %created.date,
        "booking created"
    );

    Ok(Json(BookingResponse {
        success: true,
        message: "Booking created successfully".to_string(),
        data: created,
    }))
}

fn require(field: &Option<String>, name: &str) -> Result<String, AppError> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(AppError::Validation(format!("{name} is required"))),
    }
}

// POST /api/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state
        .bookings
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    // Status moves one way only: pending -> cancelled.
    if booking.status != BookingStatus::Pending {
        return Err(AppError::Validation(format!(
            "only pending bookings can be cancelled (booking is {})",
            booking.status.as_str()
        )));
    }

    let cancelled = state
        .bookings
        .update_status(&id, BookingStatus::Cancelled)
        .await?;

    tracing::info!(booking = %id, "booking cancelled");

    Ok(Json(BookingResponse {
        success: true,
        message: "Booking cancelled".to_string(),
        data: cancelled,
    }))
}
