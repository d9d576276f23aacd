//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that take the [`Store`](crate::Store) handle as the first argument and
//! return the driver error unchanged; the HTTP layer decides how failures
//! surface. The three collections share one query shape (insert, list
//! newest-first, `$set` by id, delete by id), so the common pieces live
//! here instead of being copied per resource.

pub mod lead_repo;
pub mod prototype_repo;
pub mod review_repo;

pub use lead_repo::LeadRepo;
pub use prototype_repo::PrototypeRepo;
pub use review_repo::ReviewRepo;

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

/// Filter matching a single document by id.
fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// Sort specification for newest-first listings.
fn newest_first() -> Document {
    doc! { "createdAt": -1 }
}

/// Apply a `$set` update to a single document, returning the modified
/// count: 0 when the id matches nothing, which callers report as a count,
/// not an error. An empty field set short-circuits without touching the
/// store (the server rejects an empty `$set`).
async fn set_fields<T: Send + Sync>(
    collection: &Collection<T>,
    id: ObjectId,
    fields: Document,
) -> Result<u64, mongodb::error::Error> {
    if fields.is_empty() {
        return Ok(0);
    }
    let result = collection
        .update_one(by_id(id), doc! { "$set": fields })
        .await?;
    Ok(result.modified_count)
}

/// Delete a single document by id, returning the deleted count.
async fn delete_by_id<T: Send + Sync>(
    collection: &Collection<T>,
    id: ObjectId,
) -> Result<u64, mongodb::error::Error> {
    let result = collection.delete_one(by_id(id)).await?;
    Ok(result.deleted_count)
}
