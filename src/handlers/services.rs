use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Service, ServiceFilter, SortKey};
use crate::services::catalog;
use crate::state::AppState;

// GET /api/services
#[derive(Deserialize)]
pub struct ServicesQuery {
    pub search: Option<String>,
    /// Comma-separated list of category names.
    pub categories: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    /// Comma-separated list of tags.
    pub tags: Option<String>,
    pub sort: Option<String>,
}

impl ServicesQuery {
    fn filter(&self) -> ServiceFilter {
        let split = |value: &Option<String>| -> Vec<String> {
            value
                .as_deref()
                .unwrap_or("")
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        };

        ServiceFilter {
            search: self.search.clone().unwrap_or_default(),
            categories: split(&self.categories),
            location: self.location.clone().unwrap_or_default(),
            min_price: self.min_price.unwrap_or(0),
            max_price: self.max_price.unwrap_or(i64::MAX),
            tags: split(&self.tags),
        }
    }
}

#[derive(Serialize)]
pub struct ServicesResponse {
    pub success: bool,
    pub data: Vec<Service>,
}

pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ServicesQuery>,
) -> Result<Json<ServicesResponse>, AppError> {
    let services = state.catalog.list().await?;

    let filtered = catalog::filter_services(&services, &query.filter());
    let sort_key = query.sort.as_deref().map(SortKey::parse).unwrap_or(None);
    let data = catalog::sort_services(filtered, sort_key);

    Ok(Json(ServicesResponse {
        success: true,
        data,
    }))
}
