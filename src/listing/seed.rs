//! Built-in sample listings used by the CLI and by tests.

use chrono::Utc;

use super::{Category, Listing, ListingStatus, Shift};

/// The four sample postings the app ships with.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            title: "Stock Clerk".to_string(),
            organization: "Neighborhood Market".to_string(),
            category: Category::Market,
            salary: "$1,450/mo".to_string(),
            shift: Shift::Morning,
            distance_km: 0.5,
            address: "123 Flower St".to_string(),
            description: "Shelf organization and expiry-date checks.".to_string(),
            requirements: vec!["Quick on your feet".to_string(), "Lives nearby".to_string()],
            created_at: Utc::now(),
            status: ListingStatus::Open,
        },
        Listing {
            id: "2".to_string(),
            title: "Counter Attendant".to_string(),
            organization: "Honey Bread Bakery".to_string(),
            category: Category::Bakery,
            salary: "$1,600/mo".to_string(),
            shift: Shift::Afternoon,
            distance_km: 1.2,
            address: "456 Main Ave".to_string(),
            description: "Customer service and quick snack prep.".to_string(),
            requirements: vec!["Good communication".to_string(), "Food hygiene".to_string()],
            created_at: Utc::now(),
            status: ListingStatus::Open,
        },
        Listing {
            id: "3".to_string(),
            title: "Kitchen Assistant".to_string(),
            organization: "Local Flavor Restaurant".to_string(),
            category: Category::Restaurant,
            salary: "$1,800/mo".to_string(),
            shift: Shift::Night,
            distance_km: 2.5,
            address: "789 Augusta Rd".to_string(),
            description: "Help with plating and kitchen cleanup.".to_string(),
            requirements: vec!["Night availability".to_string(), "Teamwork".to_string()],
            created_at: Utc::now(),
            status: ListingStatus::Open,
        },
        Listing {
            id: "4".to_string(),
            title: "Cashier".to_string(),
            organization: "Total Health Pharmacy".to_string(),
            category: Category::Pharmacy,
            salary: "$1,550/mo".to_string(),
            shift: Shift::Flexible,
            distance_km: 0.8,
            address: "101 St. Benedict St".to_string(),
            description: "Register operation and shelf restocking.".to_string(),
            requirements: vec!["Basic computer skills".to_string()],
            created_at: Utc::now(),
            status: ListingStatus::Open,
        },
    ]
}
