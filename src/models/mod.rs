use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source of the vehicle listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Source {
    Otomoto,
}

/// One vehicle offer extracted from a listing page.
///
/// Only built by `RecordBuilder`, and only when `product_url`, `name`,
/// `year` and `price` all resolved. Every other field is best effort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingRecord {
    pub name: String,
    pub engine: Option<String>,
    pub power: Option<String>,
    pub description: Option<String>,
    /// Price as displayed, currency suffix included (e.g. "45 000 zł")
    pub price: String,
    pub year: i32,
    pub fuel: Option<String>,
    pub gearbox: Option<String>,
    pub mileage: Option<String>,
    pub location: Option<String>,
    /// Image URL, or the configured "no image" sentinel
    pub image_url: String,
    pub product_url: String,
}

/// Envelope handed to report writers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub source: Source,
    pub base_url: String,
    pub scraped_at: DateTime<Utc>,
    pub records: Vec<ListingRecord>,
}
