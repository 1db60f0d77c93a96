use serde::{Deserialize, Serialize};

/// A bookable salon offering. Loaded once from the catalog and treated as a
/// read-only snapshot for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub salon_name: Option<String>,
    pub price: i64,
    pub duration_minutes: i32,
    pub category: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
}

/// User-chosen constraints narrowing the visible service list. Every field is
/// defaultable; an absent constraint matches everything.
#[derive(Debug, Clone)]
pub struct ServiceFilter {
    pub search: String,
    pub categories: Vec<String>,
    pub location: String,
    pub min_price: i64,
    pub max_price: i64,
    pub tags: Vec<String>,
}

impl Default for ServiceFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            location: String::new(),
            min_price: 0,
            max_price: i64::MAX,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Rating,
    Name,
}

impl SortKey {
    /// Unrecognized keys parse to `None`; callers leave the input order
    /// untouched in that case.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price-low" => Some(SortKey::PriceLow),
            "price-high" => Some(SortKey::PriceHigh),
            "rating" => Some(SortKey::Rating),
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }
}
