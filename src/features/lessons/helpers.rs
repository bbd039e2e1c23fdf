use mongodb::bson::{Bson, Document, doc};

use crate::config::SearchMode;

pub const SEARCHABLE_TEXT_FIELDS: [&str; 2] = ["topic", "location"];
pub const SEARCHABLE_NUMERIC_FIELDS: [&str; 2] = ["price", "space"];

pub fn prepare_pattern(query: &str, mode: SearchMode) -> String {
    match mode {
        SearchMode::Literal => regex::escape(query),
        SearchMode::Pattern => query.to_string(),
    }
}

/// Case-insensitive match on the text fields, plus the same match against the
/// string form of the numeric fields so that e.g. `5` finds a price of 15.
pub fn build_search_filter(pattern: &str) -> Document {
    let mut clauses: Vec<Bson> = Vec::with_capacity(
        SEARCHABLE_TEXT_FIELDS.len() + SEARCHABLE_NUMERIC_FIELDS.len(),
    );

    for field in SEARCHABLE_TEXT_FIELDS {
        let mut clause = Document::new();
        clause.insert(field, doc! { "$regex": pattern, "$options": "i" });
        clauses.push(Bson::Document(clause));
    }

    for field in SEARCHABLE_NUMERIC_FIELDS {
        let field_path = format!("${field}");
        clauses.push(Bson::Document(doc! {
            "$expr": {
                "$regexMatch": {
                    "input": { "$toString": field_path },
                    "regex": pattern,
                    "options": "i",
                }
            }
        }));
    }

    doc! { "$or": clauses }
}

/// Splits an update payload into the lesson `id` to match and the fields to
/// `$set`. `_id` is never written; a missing `id` matches on null.
pub fn split_lesson_update(mut payload: Document) -> (Bson, Document) {
    payload.remove("_id");
    let id = payload.remove("id").unwrap_or(Bson::Null);
    (id, payload)
}
