//! Repository for the `prototypes` collection.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};

use eutian_core::prototype::string_labels;

use crate::models::prototype::{Prototype, PrototypeDocument, UpdatePrototype};
use crate::Store;

/// Provides CRUD operations for prototypes.
pub struct PrototypeRepo;

impl PrototypeRepo {
    /// Insert a new prototype, returning its generated id.
    pub async fn create(
        store: &Store,
        document: PrototypeDocument,
    ) -> Result<String, mongodb::error::Error> {
        let result = store.prototypes().insert_one(document).await?;
        Ok(result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default())
    }

    /// List all prototypes, newest first. The gallery is admin-curated and
    /// small, so there is no cap.
    pub async fn list(store: &Store) -> Result<Vec<Prototype>, mongodb::error::Error> {
        let cursor = store
            .prototypes()
            .find(doc! {})
            .sort(super::newest_first())
            .await?;
        let documents: Vec<PrototypeDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Prototype::from).collect())
    }

    /// Apply a partial update: only the fields present in the request are
    /// written. The label lists are coerced so a stored document never
    /// holds anything but an array of strings. Returns the modified count.
    pub async fn update(
        store: &Store,
        id: ObjectId,
        input: &UpdatePrototype,
    ) -> Result<u64, mongodb::error::Error> {
        let mut fields = Document::new();
        if let Some(title) = input.title.as_deref() {
            fields.insert("title", title);
        }
        if let Some(image) = input.image.as_deref() {
            fields.insert("image", image);
        }
        if let Some(category) = input.category.as_deref() {
            fields.insert("category", category);
        }
        if let Some(description) = input.description.as_deref() {
            fields.insert("description", description);
        }
        if input.tech_stack.is_some() {
            fields.insert("techStack", labels_bson(string_labels(input.tech_stack.as_ref())));
        }
        if input.features.is_some() {
            fields.insert("features", labels_bson(string_labels(input.features.as_ref())));
        }
        super::set_fields(&store.prototypes(), id, fields).await
    }

    /// Delete a prototype by id. Returns the number of deleted documents.
    pub async fn delete(store: &Store, id: ObjectId) -> Result<u64, mongodb::error::Error> {
        super::delete_by_id(&store.prototypes(), id).await
    }
}

fn labels_bson(labels: Vec<String>) -> Bson {
    Bson::Array(labels.into_iter().map(Bson::String).collect())
}
