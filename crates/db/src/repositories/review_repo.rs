//! Repository for the `reviews` collection.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use eutian_core::review;

use crate::models::review::{Review, ReviewDocument};
use crate::Store;

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning its generated id.
    pub async fn create(
        store: &Store,
        document: ReviewDocument,
    ) -> Result<String, mongodb::error::Error> {
        let result = store.reviews().insert_one(document).await?;
        Ok(result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default())
    }

    /// List reviews, newest first, capped at [`review::LIST_LIMIT`].
    /// Hidden reviews are excluded unless `include_hidden` is set (the
    /// admin dashboard asks for everything).
    pub async fn list(
        store: &Store,
        include_hidden: bool,
    ) -> Result<Vec<Review>, mongodb::error::Error> {
        let filter = if include_hidden {
            doc! {}
        } else {
            doc! { "status": review::STATUS_VISIBLE }
        };
        let cursor = store
            .reviews()
            .find(filter)
            .sort(super::newest_first())
            .limit(review::LIST_LIMIT)
            .await?;
        let documents: Vec<ReviewDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Review::from).collect())
    }

    /// Update only the status field. Returns the number of modified
    /// documents.
    pub async fn update_status(
        store: &Store,
        id: ObjectId,
        status: &str,
    ) -> Result<u64, mongodb::error::Error> {
        super::set_fields(&store.reviews(), id, doc! { "status": status }).await
    }

    /// Delete a review by id. Returns the number of deleted documents.
    pub async fn delete(store: &Store, id: ObjectId) -> Result<u64, mongodb::error::Error> {
        super::delete_by_id(&store.reviews(), id).await
    }
}
