//! Store operations for rental listings
//!
//! The `owner` reference is stored as the user's hex id string, the same
//! form it has in session claims, so scoped queries match without parsing.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::db::{bounded, parse_object_id, StoreError};
use crate::shared::places::{Place, PlaceData};

/// Store operations behind the places endpoints
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Insert a listing owned by `owner_id`
    async fn create(&self, owner_id: &str, data: PlaceData) -> Result<Place, StoreError>;

    /// Replace the client-settable fields and return the updated document;
    /// `None` for an unknown id. Ownership is the handler's concern.
    async fn update(&self, id: &str, data: PlaceData) -> Result<Option<Place>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Place>, StoreError>;

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Place>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Place>, StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    owner: String,
    title: String,
    address: String,
    photos: Vec<String>,
    description: String,
    perks: Vec<String>,
    extra_info: String,
    check_in: u32,
    check_out: u32,
    max_guests: u32,
    price: f64,
}

fn place(doc: PlaceDoc) -> Place {
    Place {
        id: doc.id.to_hex(),
        owner: doc.owner,
        title: doc.title,
        address: doc.address,
        photos: doc.photos,
        description: doc.description,
        perks: doc.perks,
        extra_info: doc.extra_info,
        check_in: doc.check_in,
        check_out: doc.check_out,
        max_guests: doc.max_guests,
        price: doc.price,
    }
}

/// MongoDB-backed listing store
pub struct MongoPlaceStore {
    collection: Collection<PlaceDoc>,
    op_timeout: Duration,
}

impl MongoPlaceStore {
    pub fn new(db: &Database, op_timeout: Duration) -> Self {
        Self {
            collection: db.collection("places"),
            op_timeout,
        }
    }
}

#[async_trait]
impl PlaceStore for MongoPlaceStore {
    async fn create(&self, owner_id: &str, data: PlaceData) -> Result<Place, StoreError> {
        let doc = PlaceDoc {
            id: ObjectId::new(),
            owner: owner_id.to_string(),
            title: data.title,
            address: data.address,
            photos: data.photos,
            description: data.description,
            perks: data.perks,
            extra_info: data.extra_info,
            check_in: data.check_in,
            check_out: data.check_out,
            max_guests: data.max_guests,
            price: data.price,
        };

        bounded(self.op_timeout, self.collection.insert_one(&doc)).await?;
        Ok(place(doc))
    }

    async fn update(&self, id: &str, data: PlaceData) -> Result<Option<Place>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let update = doc! {
            "$set": {
                "title": data.title,
                "address": data.address,
                "photos": data.photos,
                "description": data.description,
                "perks": data.perks,
                "extraInfo": data.extra_info,
                "checkIn": data.check_in,
                "checkOut": data.check_out,
                "maxGuests": data.max_guests,
                "price": data.price,
            }
        };

        let updated = bounded(
            self.op_timeout,
            self.collection
                .find_one_and_update(doc! { "_id": oid }, update)
                .return_document(ReturnDocument::After),
        )
        .await?;
        Ok(updated.map(place))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Place>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let found = bounded(self.op_timeout, self.collection.find_one(doc! { "_id": oid }))
            .await?;
        Ok(found.map(place))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Place>, StoreError> {
        let docs: Vec<PlaceDoc> = bounded(self.op_timeout, async {
            self.collection
                .find(doc! { "owner": owner_id })
                .await?
                .try_collect()
                .await
        })
        .await?;
        Ok(docs.into_iter().map(place).collect())
    }

    async fn list_all(&self) -> Result<Vec<Place>, StoreError> {
        let docs: Vec<PlaceDoc> = bounded(self.op_timeout, async {
            self.collection.find(doc! {}).await?.try_collect().await
        })
        .await?;
        Ok(docs.into_iter().map(place).collect())
    }
}
