//! Lead entity model and DTOs.

use eutian_core::lead::Plan;
use eutian_core::types::Timestamp;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// A document in the `leads` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    /// `India` or `Global` by convention; stored as submitted.
    pub region: String,
    pub message: String,
    pub status: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
}

/// Public lead representation returned by the API, with the document id
/// exposed as a hex string `id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    pub region: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
}

impl From<LeadDocument> for Lead {
    fn from(doc: LeadDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            whatsapp: doc.whatsapp,
            website_type: doc.website_type,
            plan: doc.plan,
            region: doc.region,
            message: doc.message,
            status: doc.status,
            created_at: doc.created_at,
        }
    }
}

/// Request body for creating a lead.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLead {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub website_type: Option<String>,
    pub plan: Option<String>,
    pub region: Option<String>,
    pub message: Option<String>,
}

/// Request body for updating a lead's status.
#[derive(Debug, Deserialize)]
pub struct UpdateLeadStatus {
    pub id: Option<String>,
    pub status: Option<String>,
}
