//! In-memory store implementations
//!
//! Same contracts as the Mongo-backed stores, over mutex-guarded vectors,
//! so handler and routing behavior can be exercised without a database.

use async_trait::async_trait;
use std::sync::Mutex;

use staybook::backend::auth::users::{NewUser, ProfilePatch, UserRecord, UserStore};
use staybook::backend::bookings::BookingStore;
use staybook::backend::db::StoreError;
use staybook::backend::places::PlaceStore;
use staybook::shared::bookings::{Booking, NewBooking};
use staybook::shared::places::{Place, PlaceData};

/// Hex ids in the same shape the real store hands out
fn next_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..24].to_string()
}

#[derive(Default)]
pub struct MemoryUserStore {
    records: Mutex<Vec<UserRecord>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.email == user.email) {
            return Err(StoreError::Duplicate);
        }
        let record = UserRecord {
            id: next_id(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn update_profile(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> Result<Option<UserRecord>, StoreError> {
        let mut records = self.records.lock().unwrap();
        // the unique email constraint also guards updates
        if let Some(email) = &patch.email {
            if records.iter().any(|r| r.email == *email && r.id != id) {
                return Err(StoreError::Duplicate);
            }
        }
        let record = match records.iter_mut().find(|r| r.id == id) {
            Some(record) => record,
            None => return Ok(None),
        };
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(hash) = patch.password_hash {
            record.password_hash = hash;
        }
        Ok(Some(record.clone()))
    }
}

#[derive(Default)]
pub struct MemoryPlaceStore {
    places: Mutex<Vec<Place>>,
}

fn apply(place: &mut Place, data: PlaceData) {
    place.title = data.title;
    place.address = data.address;
    place.photos = data.photos;
    place.description = data.description;
    place.perks = data.perks;
    place.extra_info = data.extra_info;
    place.check_in = data.check_in;
    place.check_out = data.check_out;
    place.max_guests = data.max_guests;
    place.price = data.price;
}

#[async_trait]
impl PlaceStore for MemoryPlaceStore {
    async fn create(&self, owner_id: &str, data: PlaceData) -> Result<Place, StoreError> {
        let mut place = Place {
            id: next_id(),
            owner: owner_id.to_string(),
            title: String::new(),
            address: String::new(),
            photos: vec![],
            description: String::new(),
            perks: vec![],
            extra_info: String::new(),
            check_in: 0,
            check_out: 0,
            max_guests: 0,
            price: 0.0,
        };
        apply(&mut place, data);
        self.places.lock().unwrap().push(place.clone());
        Ok(place)
    }

    async fn update(&self, id: &str, data: PlaceData) -> Result<Option<Place>, StoreError> {
        let mut places = self.places.lock().unwrap();
        let place = match places.iter_mut().find(|p| p.id == id) {
            Some(place) => place,
            None => return Ok(None),
        };
        apply(place, data);
        Ok(Some(place.clone()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Place>, StoreError> {
        let places = self.places.lock().unwrap();
        Ok(places.iter().find(|p| p.id == id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Place>, StoreError> {
        let places = self.places.lock().unwrap();
        Ok(places.iter().filter(|p| p.owner == owner_id).cloned().collect())
    }

    async fn list_all(&self) -> Result<Vec<Place>, StoreError> {
        Ok(self.places.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MemoryBookingStore {
    bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn create(&self, user_id: &str, booking: NewBooking) -> Result<Booking, StoreError> {
        let stored = Booking {
            id: next_id(),
            place: booking.place,
            user: user_id.to_string(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            number_of_guests: booking.number_of_guests,
            name: booking.name,
            phone: booking.phone,
            price: booking.price,
        };
        self.bookings.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, StoreError> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter().filter(|b| b.user == user_id).cloned().collect())
    }
}

/// A user store that never answers, for exercising the 503 path
pub struct UnavailableUserStore;

#[async_trait]
impl UserStore for UnavailableUserStore {
    async fn create(&self, _user: NewUser) -> Result<UserRecord, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }

    async fn update_profile(
        &self,
        _id: &str,
        _patch: ProfilePatch,
    ) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }
}
