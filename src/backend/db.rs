/**
 * Document Store Plumbing
 *
 * Connection setup and shared error handling for the MongoDB-backed stores.
 * Every store operation runs through `bounded`, which enforces the
 * configured time limit so a stalled server surfaces as `Unavailable`
 * instead of hanging the request.
 */

use std::future::IntoFuture;
use std::time::Duration;

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ClientOptions;
use mongodb::Client;
use thiserror::Error;

/// Server-side error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Errors surfaced by the store layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected the write
    #[error("duplicate value for a unique field")]
    Duplicate,

    /// The store could not be reached within the configured bounds
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other driver failure
    #[error("store operation failed: {0}")]
    Driver(mongodb::error::Error),
}

/// Connect to the document store and verify it answers a ping
///
/// The returned client owns the connection pool; callers shut it down
/// explicitly when the server stops.
pub async fn connect(uri: &str, op_timeout: Duration) -> Result<Client, StoreError> {
    let mut options = ClientOptions::parse(uri).await.map_err(classify)?;
    options.server_selection_timeout = Some(op_timeout);
    options.connect_timeout = Some(op_timeout);

    let client = Client::with_options(options).map_err(classify)?;

    bounded(op_timeout, async {
        client.database("admin").run_command(doc! { "ping": 1 }).await
    })
    .await?;

    Ok(client)
}

/// Run a store operation with an upper time bound
///
/// Accepts driver actions directly as well as async blocks.
pub(crate) async fn bounded<T, F>(limit: Duration, op: F) -> Result<T, StoreError>
where
    F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(classify(err)),
        Err(_) => Err(StoreError::Unavailable(format!(
            "operation exceeded {}s",
            limit.as_secs()
        ))),
    }
}

/// Ids arrive as path or body strings; one that does not parse cannot match
/// any document and reads as absent.
pub fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

fn classify(err: mongodb::error::Error) -> StoreError {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write))
            if write.code == DUPLICATE_KEY_CODE =>
        {
            StoreError::Duplicate
        }
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Unavailable(err.to_string()),
        _ => StoreError::Driver(err),
    }
}
