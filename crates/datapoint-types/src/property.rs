//! Property listing records.

use serde::{Deserialize, Serialize};

/// A property listing with every required field present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Listing date, as written in the source file.
    pub date: String,
    /// Location area of the property.
    pub location: String,
    /// Property type (e.g., "Leilighet").
    pub property_type_description: String,
    /// Total price.
    pub price_total: f64,
    /// Number of bedrooms.
    pub number_of_bedrooms: u32,
    /// Size bucket, as written in the source file.
    pub area_range: String,
    /// Link to the listing.
    pub ad_link: String,
}

impl PropertyRecord {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 7] = [
        "date",
        "location",
        "property_type_description",
        "price_total",
        "number_of_bedrooms",
        "area_range",
        "ad_link",
    ];

    /// Returns true if the record's location equals `location`, ignoring case
    /// and surrounding whitespace.
    #[must_use]
    pub fn is_in(&self, location: &str) -> bool {
        self.location.trim().to_lowercase() == location.trim().to_lowercase()
    }
}
