use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting record. Opaque to the map layout engine except for the id
/// and the category tag, which selects the marker glyph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub category: Category,
    /// Salary as shown to the user (e.g., "$1,450/mo" or "Negotiable").
    pub salary: String,
    pub shift: Shift,
    pub distance_km: f64,
    pub address: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: ListingStatus,
}

/// Kind of business behind a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Market,
    Pharmacy,
    Restaurant,
    Shop,
    Bakery,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Market => "market",
            Category::Pharmacy => "pharmacy",
            Category::Restaurant => "restaurant",
            Category::Shop => "shop",
            Category::Bakery => "bakery",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "market" => Some(Category::Market),
            "pharmacy" => Some(Category::Pharmacy),
            "restaurant" => Some(Category::Restaurant),
            "shop" => Some(Category::Shop),
            "bakery" => Some(Category::Bakery),
            _ => None,
        }
    }

    /// Marker glyph shown for a pin of this category. Closed mapping, one
    /// glyph per category.
    pub fn glyph(self) -> MarkerGlyph {
        match self {
            Category::Market => MarkerGlyph::Basket,
            Category::Pharmacy => MarkerGlyph::Cross,
            Category::Restaurant => MarkerGlyph::Cutlery,
            Category::Shop => MarkerGlyph::Tag,
            Category::Bakery => MarkerGlyph::Loaf,
        }
    }
}

/// Visual marker variant for an individual map pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerGlyph {
    Basket,
    Cross,
    Cutlery,
    Tag,
    Loaf,
}

impl MarkerGlyph {
    pub fn symbol(self) -> char {
        match self {
            MarkerGlyph::Basket => '🛒',
            MarkerGlyph::Cross => '✚',
            MarkerGlyph::Cutlery => '🍴',
            MarkerGlyph::Tag => '🏷',
            MarkerGlyph::Loaf => '🥖',
        }
    }
}

/// Work shift a listing asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
    Flexible,
}

/// Lifecycle state of a posting on the employer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Open,
    InProcess,
    Closed,
}
