use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Keys a client may not set on its own documents.
const RESERVED_KEYS: [&str; 2] = ["_id", "role"];

/// Permission level written by the admin promotion route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Default,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Admin => "admin",
        }
    }
}

/// A registered user. Everything but `_id` (email, role, profile) is kept as stored,
/// so documents written by other clients still list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

impl User {
    /// New self-registered user. Client-supplied `_id`/`role` keys are discarded.
    pub fn register(email: String, mut profile: Document) -> Self {
        strip_reserved(&mut profile);
        profile.remove("email");
        let mut fields = doc! { "email": email };
        fields.extend(profile);
        Self { id: None, fields }
    }
}

/// An apartment listing. Opaque to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub listing: Document,
}

/// A reservation request, keyed by whatever `email` value the applicant sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

impl Reservation {
    pub fn new(email: Bson, mut details: Document) -> Self {
        strip_reserved(&mut details);
        details.remove("email");
        let mut fields = doc! { "email": email };
        fields.extend(details);
        Self { id: None, fields }
    }
}

fn strip_reserved(doc: &mut Document) {
    for key in RESERVED_KEYS {
        doc.remove(key);
    }
}

// ── Write acknowledgements ───────────────────────────────────────────────────

/// Result of an insert, rendered as `{acknowledged, insertedId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Option<String>,
}

/// Result of a delete, rendered as `{acknowledged, deletedCount}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Result of an update, rendered as
/// `{acknowledged, matchedCount, modifiedCount, upsertedCount, upsertedId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

/// Parse a 24-hex path segment into an `ObjectId`.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId)
}
