/**
 * Credential Store
 *
 * User records and the store trait behind registration, login and profile
 * handling. The Mongo implementation leaves the unique-email guarantee to
 * a unique index, so concurrent registrations race in the store rather
 * than in application code.
 */

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::db::{bounded, parse_object_id, StoreError};

/// A stored user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Document id (hex)
    pub id: String,
    pub name: String,
    pub email: String,
    /// bcrypt hash; stays server-side
    pub password_hash: String,
}

/// Fields for a new account; the credential arrives already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Profile changes; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Store operations behind the account endpoints
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account; `StoreError::Duplicate` when the email is taken
    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Apply a patch and return the updated record; `None` for an unknown id
    async fn update_profile(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> Result<Option<UserRecord>, StoreError>;
}

/// Collection document; `password` holds the bcrypt hash
#[derive(Debug, Serialize, Deserialize)]
struct UserDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
    password: String,
}

fn record(doc: UserDoc) -> UserRecord {
    UserRecord {
        id: doc.id.to_hex(),
        name: doc.name,
        email: doc.email,
        password_hash: doc.password,
    }
}

/// MongoDB-backed credential store
pub struct MongoUserStore {
    collection: Collection<UserDoc>,
    op_timeout: Duration,
}

impl MongoUserStore {
    pub fn new(db: &Database, op_timeout: Duration) -> Self {
        Self {
            collection: db.collection("users"),
            op_timeout,
        }
    }

    /// Create the unique email index; runs once at startup
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        bounded(self.op_timeout, async {
            self.collection.create_index(index).await.map(|_| ())
        })
        .await
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let doc = UserDoc {
            id: ObjectId::new(),
            name: user.name,
            email: user.email,
            password: user.password_hash,
        };

        bounded(self.op_timeout, self.collection.insert_one(&doc)).await?;
        Ok(record(doc))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let found = bounded(
            self.op_timeout,
            self.collection.find_one(doc! { "email": email }),
        )
        .await?;
        Ok(found.map(record))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let found = bounded(self.op_timeout, self.collection.find_one(doc! { "_id": oid }))
            .await?;
        Ok(found.map(record))
    }

    async fn update_profile(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> Result<Option<UserRecord>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let mut set = doc! {};
        if let Some(name) = patch.name {
            set.insert("name", name);
        }
        if let Some(email) = patch.email {
            set.insert("email", email);
        }
        if let Some(hash) = patch.password_hash {
            set.insert("password", hash);
        }
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        let updated = bounded(
            self.op_timeout,
            self.collection
                .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
                .return_document(ReturnDocument::After),
        )
        .await?;
        Ok(updated.map(record))
    }
}
