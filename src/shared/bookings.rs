//! Booking Data Structures
//!
//! A booking ties a user to a place for a date range. The `user` field is
//! always the verified session identity of the creating request. Bookings
//! are immutable once created.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::places::Place;

/// A booking as stored, with the place held by id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Document id (hex ObjectId)
    #[serde(rename = "_id")]
    pub id: String,
    /// Id of the booked place
    pub place: String,
    /// Id of the booking user, fixed at creation
    pub user: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    /// Contact name for the stay
    pub name: String,
    pub phone: String,
    /// Total price for the stay
    pub price: f64,
}

/// Body of `POST /api/bookings`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub place: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    pub name: String,
    pub phone: String,
    pub price: f64,
}

/// A booking as served by read endpoints, with the place document expanded
/// in the `place` member. `None` when the referenced place no longer
/// resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithPlace {
    #[serde(rename = "_id")]
    pub id: String,
    pub place: Option<Place>,
    pub user: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    pub name: String,
    pub phone: String,
    pub price: f64,
}

impl BookingWithPlace {
    /// Replace the place id with the resolved document
    pub fn expand(booking: Booking, place: Option<Place>) -> Self {
        Self {
            id: booking.id,
            place,
            user: booking.user,
            check_in: booking.check_in,
            check_out: booking.check_out,
            number_of_guests: booking.number_of_guests,
            name: booking.name,
            phone: booking.phone,
            price: booking.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking {
            id: "651f1f77bcf86cd799439020".to_string(),
            place: "651f1f77bcf86cd799439011".to_string(),
            user: "651f1f77bcf86cd799439012".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            number_of_guests: 2,
            name: "Ann".to_string(),
            phone: "555-0101".to_string(),
            price: 480.0,
        }
    }

    #[test]
    fn booking_dates_serialize_as_iso_strings() {
        let json = serde_json::to_value(sample_booking()).unwrap();
        assert_eq!(json["checkIn"], "2024-07-01");
        assert_eq!(json["checkOut"], "2024-07-05");
        assert_eq!(json["numberOfGuests"], 2);
    }

    #[test]
    fn expand_keeps_every_booking_field() {
        let booking = sample_booking();
        let expanded = BookingWithPlace::expand(booking.clone(), None);
        assert_eq!(expanded.id, booking.id);
        assert_eq!(expanded.user, booking.user);
        assert_eq!(expanded.price, booking.price);
        assert!(expanded.place.is_none());
    }
}
