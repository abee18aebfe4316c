//! Schema-less records exposed over HTTP.
//!
//! Documents arrive from the store as BSON. Before transport every document is
//! turned into a [`Record`]: an insertion-ordered JSON object whose identifier
//! field is always a plain string.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value as JsonValue};

/// Name of the store-native identifier field.
pub const ID_FIELD: &str = "_id";

/// Ordered field name -> JSON value mapping.
pub type Record = Map<String, JsonValue>;

/// String form of an identifier, whatever its BSON type.
pub fn identifier_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        Bson::Double(n) => double_to_string(*n),
        other => other.clone().into_relaxed_extjson().to_string(),
    }
}

/// Integral doubles keep a trailing `.0` (`2.0`, not `2`).
fn double_to_string(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

/// Converts one stored document into a [`Record`], keeping field order.
///
/// `_id` becomes its string form; all other fields use relaxed extended JSON.
pub fn from_document(doc: Document) -> Record {
    let mut record = Record::with_capacity(doc.len());
    for (key, value) in doc {
        let value = if key == ID_FIELD {
            JsonValue::String(identifier_to_string(&value))
        } else {
            value.into_relaxed_extjson()
        };
        record.insert(key, value);
    }
    record
}

/// Converts a whole collection snapshot, preserving store order.
pub fn from_documents(docs: Vec<Document>) -> Vec<Record> {
    docs.into_iter().map(from_document).collect()
}
