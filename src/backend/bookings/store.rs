//! Store operations for bookings
//!
//! Bookings are written once and never mutated. Check-in/check-out dates
//! are kept as ISO date strings in the collection, which sorts and compares
//! correctly without a date type on the wire.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::db::{bounded, parse_object_id, StoreError};
use crate::shared::bookings::{Booking, NewBooking};

/// Store operations behind the bookings endpoints
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a booking made by `user_id`; the place reference is stored
    /// as given (existence checks are out of scope)
    async fn create(&self, user_id: &str, booking: NewBooking) -> Result<Booking, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError>;

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    place: String,
    user: String,
    check_in: chrono::NaiveDate,
    check_out: chrono::NaiveDate,
    number_of_guests: u32,
    name: String,
    phone: String,
    price: f64,
}

fn booking(doc: BookingDoc) -> Booking {
    Booking {
        id: doc.id.to_hex(),
        place: doc.place,
        user: doc.user,
        check_in: doc.check_in,
        check_out: doc.check_out,
        number_of_guests: doc.number_of_guests,
        name: doc.name,
        phone: doc.phone,
        price: doc.price,
    }
}

/// MongoDB-backed booking store
pub struct MongoBookingStore {
    collection: Collection<BookingDoc>,
    op_timeout: Duration,
}

impl MongoBookingStore {
    pub fn new(db: &Database, op_timeout: Duration) -> Self {
        Self {
            collection: db.collection("bookings"),
            op_timeout,
        }
    }
}

#[async_trait]
impl BookingStore for MongoBookingStore {
    async fn create(&self, user_id: &str, booking_in: NewBooking) -> Result<Booking, StoreError> {
        let doc = BookingDoc {
            id: ObjectId::new(),
            place: booking_in.place,
            user: user_id.to_string(),
            check_in: booking_in.check_in,
            check_out: booking_in.check_out,
            number_of_guests: booking_in.number_of_guests,
            name: booking_in.name,
            phone: booking_in.phone,
            price: booking_in.price,
        };

        bounded(self.op_timeout, self.collection.insert_one(&doc)).await?;
        Ok(booking(doc))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let found = bounded(self.op_timeout, self.collection.find_one(doc! { "_id": oid }))
            .await?;
        Ok(found.map(booking))
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, StoreError> {
        let docs: Vec<BookingDoc> = bounded(self.op_timeout, async {
            self.collection
                .find(doc! { "user": user_id })
                .await?
                .try_collect()
                .await
        })
        .await?;
        Ok(docs.into_iter().map(booking).collect())
    }
}
