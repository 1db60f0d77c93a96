use crate::models::{Service, ServiceFilter, SortKey};

/// Applies every constraint of the filter as a conjunction. Output order is
/// the input order; no matches is an empty list, not an error.
pub fn filter_services(services: &[Service], filter: &ServiceFilter) -> Vec<Service> {
    services
        .iter()
        .filter(|service| matches(service, filter))
        .cloned()
        .collect()
}

fn matches(service: &Service, filter: &ServiceFilter) -> bool {
    if !filter.search.is_empty() {
        let search = filter.search.to_lowercase();
        let hit = service.name.to_lowercase().contains(&search)
            || service
                .salon_name
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&search))
            || service
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&search));
        if !hit {
            return false;
        }
    }

    // Tags are a union: any tag hitting the name or category keeps the
    // service. Intentionally permissive, unlike the category membership
    // check below.
    if !filter.tags.is_empty() {
        let hit = filter.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            service.name.to_lowercase().contains(&tag)
                || service
                    .category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&tag))
        });
        if !hit {
            return false;
        }
    }

    if !filter.categories.is_empty() {
        match service.category.as_deref() {
            Some(category) if filter.categories.iter().any(|c| c == category) => {}
            _ => return false,
        }
    }

    if !filter.location.is_empty() && service.location.as_deref() != Some(&filter.location) {
        return false;
    }

    // Inclusive at both bounds.
    service.price >= filter.min_price && service.price <= filter.max_price
}

/// Sorts an owned copy of the list; `None` leaves the input order untouched.
/// Ties keep their relative input order (stable sort).
pub fn sort_services(services: Vec<Service>, key: Option<SortKey>) -> Vec<Service> {
    let mut sorted = services;
    match key {
        Some(SortKey::PriceLow) => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortKey::PriceHigh) => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        Some(SortKey::Rating) => sorted.sort_by(|a, b| {
            let rating_a = a.rating.unwrap_or(0.0);
            let rating_b = b.rating.unwrap_or(0.0);
            rating_b.total_cmp(&rating_a)
        }),
        Some(SortKey::Name) => sorted.sort_by(|a, b| {
            let name_a = a.salon_name.as_deref().unwrap_or("").to_lowercase();
            let name_b = b.salon_name.as_deref().unwrap_or("").to_lowercase();
            name_a.cmp(&name_b)
        }),
        None => {}
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str, name: &str, salon: &str, price: i64) -> Service {
        Service {
            id: id.to_string(),
            name: name.to_string(),
            salon_name: Some(salon.to_string()),
            price,
            duration_minutes: 30,
            category: None,
            location: None,
            rating: None,
            reviews: None,
        }
    }

    fn sample() -> Vec<Service> {
        vec![
            Service {
                category: Some("Hair".to_string()),
                location: Some("Texas, USA".to_string()),
                rating: Some(4.9),
                ..service("1", "Haircut", "Glow & Glam Studio", 500)
            },
            Service {
                category: Some("Hair".to_string()),
                location: Some("California, USA".to_string()),
                rating: Some(4.5),
                ..service("2", "Hair Spa", "Aura Luxe Salon", 1200)
            },
            Service {
                category: Some("Skin".to_string()),
                location: Some("Texas, USA".to_string()),
                ..service("3", "Facial", "Makeup Nails", 900)
            },
            service("4", "Beard Trim", "The Velvet Touch", 300),
        ]
    }

    fn ids(services: &[Service]) -> Vec<&str> {
        services.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_is_identity() {
        let services = sample();
        let filtered = filter_services(&services, &ServiceFilter::default());
        assert_eq!(ids(&filtered), ids(&services));
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(filter_services(&[], &ServiceFilter::default()).is_empty());
        assert!(sort_services(Vec::new(), Some(SortKey::PriceLow)).is_empty());
    }

    #[test]
    fn test_search_matches_name_salon_and_category() {
        let services = sample();

        let filter = ServiceFilter {
            search: "hair".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&services, &filter)), ["1", "2"]);

        // Salon name hit, case-insensitive.
        let filter = ServiceFilter {
            search: "VELVET".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&services, &filter)), ["4"]);

        // Category hit.
        let filter = ServiceFilter {
            search: "skin".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&services, &filter)), ["3"]);
    }

    #[test]
    fn test_tags_are_a_union() {
        let services = sample();
        let filter = ServiceFilter {
            tags: vec!["facial".to_string(), "beard".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&services, &filter)), ["3", "4"]);
    }

    #[test]
    fn test_category_membership_excludes_uncategorized() {
        let services = sample();
        let filter = ServiceFilter {
            categories: vec!["Hair".to_string(), "Skin".to_string()],
            ..Default::default()
        };
        // "4" has no category and must fail once the set is non-empty.
        assert_eq!(ids(&filter_services(&services, &filter)), ["1", "2", "3"]);
    }

    #[test]
    fn test_location_is_exact_match() {
        let services = sample();
        let filter = ServiceFilter {
            location: "Texas, USA".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&services, &filter)), ["1", "3"]);

        let filter = ServiceFilter {
            location: "Texas".to_string(),
            ..Default::default()
        };
        assert!(filter_services(&services, &filter).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let services = sample();
        let filter = ServiceFilter {
            min_price: 300,
            max_price: 900,
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&services, &filter)), ["1", "3", "4"]);
    }

    #[test]
    fn test_conjunction_of_constraints() {
        let services = sample();
        let filter = ServiceFilter {
            search: "hair".to_string(),
            location: "Texas, USA".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&services, &filter)), ["1"]);
    }

    #[test]
    fn test_sort_price_low_and_high_are_reverses() {
        let services = sample();
        let low = sort_services(services.clone(), Some(SortKey::PriceLow));
        let high = sort_services(services, Some(SortKey::PriceHigh));

        assert_eq!(ids(&low), ["4", "1", "3", "2"]);
        let mut reversed = ids(&high);
        reversed.reverse();
        assert_eq!(ids(&low), reversed);
    }

    #[test]
    fn test_sort_rating_treats_missing_as_zero() {
        let services = sample();
        let sorted = sort_services(services, Some(SortKey::Rating));
        assert_eq!(ids(&sorted), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_name_uses_salon_name() {
        let services = sample();
        let sorted = sort_services(services, Some(SortKey::Name));
        assert_eq!(ids(&sorted), ["2", "1", "3", "4"]);
    }

    #[test]
    fn test_unknown_sort_key_preserves_order() {
        assert_eq!(SortKey::parse("newest"), None);
        assert_eq!(SortKey::parse(""), None);

        let services = sample();
        let sorted = sort_services(services.clone(), SortKey::parse("newest"));
        assert_eq!(ids(&sorted), ids(&services));
    }

    #[test]
    fn test_sort_does_not_mutate_callers_list() {
        let services = sample();
        let before = ids(&services);
        let _ = sort_services(services.clone(), Some(SortKey::PriceHigh));
        assert_eq!(ids(&services), before);
    }
}
