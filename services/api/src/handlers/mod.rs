pub mod apartment;
pub mod health;
pub mod reservation;
pub mod token;
pub mod user;

use mongodb::bson::{Bson, Document, oid::ObjectId};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Render a stored document's free-form fields as plain JSON.
pub(crate) fn document_to_json(doc: Document) -> Map<String, Value> {
    doc.into_iter().map(|(k, v)| (k, bson_to_json(v))).collect()
}

/// Relaxed extended JSON, except ObjectIds become hex strings and dates RFC 3339 strings
/// at any depth.
fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => Value::Object(document_to_json(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Convert free-form request fields into a BSON document.
pub(crate) fn json_to_document(map: &Map<String, Value>) -> Result<Document, ApiError> {
    mongodb::bson::to_document(map).map_err(|_| ApiError::InvalidBody)
}

pub(crate) fn hex_id(id: Option<ObjectId>) -> Option<String> {
    id.map(|oid| oid.to_hex())
}
