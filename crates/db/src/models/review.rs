//! Review entity model and DTOs.

use eutian_core::types::Timestamp;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// A document in the `reviews` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Always an integer in [1, 5]; normalized before storage.
    pub rating: i32,
    pub message: String,
    pub status: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
}

/// Public review representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub rating: i32,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
}

impl From<ReviewDocument> for Review {
    fn from(doc: ReviewDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
            rating: doc.rating,
            message: doc.message,
            status: doc.status,
            created_at: doc.created_at,
        }
    }
}

/// Request body for submitting a review. The rating arrives as an
/// arbitrary number and is normalized by the handler.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<f64>,
    pub message: Option<String>,
}

/// Request body for updating a review's status.
#[derive(Debug, Deserialize)]
pub struct UpdateReviewStatus {
    pub id: Option<String>,
    pub status: Option<String>,
}
