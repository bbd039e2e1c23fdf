//! Conversion between JSON bodies and stored BSON documents.
//!
//! Responses render `ObjectId`s as plain hex strings and dates as RFC 3339
//! strings, which is what the storefront client reads; every other value
//! goes out as relaxed extended JSON.

use chrono::SecondsFormat;
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

use crate::core::error::AppError;

pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

pub fn documents_to_json(documents: Vec<Document>) -> Vec<Value> {
    documents.into_iter().map(document_to_json).collect()
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(datetime) => Value::String(
            datetime
                .to_chrono()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Accepts only a JSON object; anything else cannot be stored as a document.
pub fn json_to_document(value: Value) -> Result<Document, AppError> {
    match value {
        Value::Object(map) => Ok(map_to_document(map)),
        other => Err(AppError::invalid_document(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

pub fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(flag) => Bson::Boolean(flag),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                match i32::try_from(integer) {
                    Ok(small) => Bson::Int32(small),
                    Err(_) => Bson::Int64(integer),
                }
            } else {
                number.as_f64().map_or(Bson::Null, Bson::Double)
            }
        }
        Value::String(text) => Bson::String(text),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(map_to_document(map)),
    }
}

fn map_to_document(map: Map<String, Value>) -> Document {
    let mut document = Document::new();
    for (key, value) in map {
        document.insert(key, json_to_bson(value));
    }
    document
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
