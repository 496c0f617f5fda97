use serde_json::{Map, Value};

/// Top-level model info document: model identifier -> per-model metadata
/// object. Key order is preserved through a load/save cycle.
pub type Document = Map<String, Value>;

#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("model not found: {0}")]
    ModelNotFound(String),
    #[error("model entry is not an object: {0}")]
    EntryNotObject(String),
    #[error("field is not an object: {0}.{1}")]
    FieldNotObject(String, String),
    #[error("document root is not an object")]
    RootNotObject,
}

pub fn into_document(value: Value) -> anyhow::Result<Document> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DocumentError::RootNotObject.into()),
    }
}

pub fn model_entry<'a>(doc: &'a Document, id: &str) -> anyhow::Result<&'a Map<String, Value>> {
    let entry = doc
        .get(id)
        .ok_or_else(|| DocumentError::ModelNotFound(id.to_string()))?;
    entry
        .as_object()
        .ok_or_else(|| DocumentError::EntryNotObject(id.to_string()).into())
}

/// The `tag` object of a model entry. A missing `tag` reads as empty.
pub fn tag_of<'a>(
    doc: &'a Document,
    id: &str,
) -> anyhow::Result<Option<&'a Map<String, Value>>> {
    let entry = model_entry(doc, id)?;
    match entry.get("tag") {
        None => Ok(None),
        Some(v) => v
            .as_object()
            .map(Some)
            .ok_or_else(|| DocumentError::FieldNotObject(id.to_string(), "tag".to_string()).into()),
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
