//! Prototype entity model and DTOs.

use eutian_core::types::Timestamp;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// A document in the `prototypes` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrototypeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    /// Image URL.
    pub image: String,
    pub category: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
}

/// Public prototype representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prototype {
    pub id: String,
    pub title: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub created_at: Timestamp,
}

impl From<PrototypeDocument> for Prototype {
    fn from(doc: PrototypeDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: doc.title,
            image: doc.image,
            category: doc.category,
            description: doc.description,
            tech_stack: doc.tech_stack,
            features: doc.features,
            created_at: doc.created_at,
        }
    }
}

/// Request body for creating a prototype. The label lists are taken as raw
/// JSON and coerced: anything that is not an array of strings becomes an
/// empty list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrototype {
    pub title: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<serde_json::Value>,
    pub features: Option<serde_json::Value>,
}

/// Request body for a partial prototype update. Only the fields present in
/// the request are applied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrototype {
    pub id: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<serde_json::Value>,
    pub features: Option<serde_json::Value>,
}
