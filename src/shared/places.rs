//! Rental Listing Data Structures
//!
//! A place is a rentable property. The `owner` field is always derived from
//! the verified session of the creating request, never from a request body.

use serde::{Deserialize, Serialize};

/// A rental listing as stored and served
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Document id (hex ObjectId)
    #[serde(rename = "_id")]
    pub id: String,
    /// Id of the owning user, fixed at creation
    pub owner: String,
    pub title: String,
    pub address: String,
    /// Photo filenames under `/uploads`; index 0 is the main photo
    pub photos: Vec<String>,
    pub description: String,
    /// Amenity tags (wifi, parking, ...)
    pub perks: Vec<String>,
    pub extra_info: String,
    /// Earliest check-in hour
    pub check_in: u32,
    /// Latest check-out hour
    pub check_out: u32,
    pub max_guests: u32,
    /// Price per night
    pub price: f64,
}

/// Listing fields a client may set; everything it omits defaults to empty.
///
/// Deliberately has no `owner` or `_id` member, so those can only come from
/// the session and the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceData {
    pub title: String,
    pub address: String,
    pub photos: Vec<String>,
    pub description: String,
    pub perks: Vec<String>,
    pub extra_info: String,
    pub check_in: u32,
    pub check_out: u32,
    pub max_guests: u32,
    pub price: f64,
}

/// Body of `PUT /api/places`: the target id plus the replacement fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlaceRequest {
    pub id: String,
    #[serde(flatten)]
    pub data: PlaceData,
}
