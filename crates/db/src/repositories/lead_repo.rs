//! Repository for the `leads` collection.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use eutian_core::lead;

use crate::models::lead::{Lead, LeadDocument};
use crate::Store;

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, returning its generated id.
    pub async fn create(
        store: &Store,
        document: LeadDocument,
    ) -> Result<String, mongodb::error::Error> {
        let result = store.leads().insert_one(document).await?;
        Ok(result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default())
    }

    /// List the most recent leads, newest first, capped at
    /// [`lead::LIST_LIMIT`].
    pub async fn list(store: &Store) -> Result<Vec<Lead>, mongodb::error::Error> {
        let cursor = store
            .leads()
            .find(doc! {})
            .sort(super::newest_first())
            .limit(lead::LIST_LIMIT)
            .await?;
        let documents: Vec<LeadDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Lead::from).collect())
    }

    /// Update only the status field. Returns the number of modified
    /// documents.
    pub async fn update_status(
        store: &Store,
        id: ObjectId,
        status: &str,
    ) -> Result<u64, mongodb::error::Error> {
        super::set_fields(&store.leads(), id, doc! { "status": status }).await
    }

    /// Delete a lead by id. Returns the number of deleted documents.
    pub async fn delete(store: &Store, id: ObjectId) -> Result<u64, mongodb::error::Error> {
        super::delete_by_id(&store.leads(), id).await
    }
}
