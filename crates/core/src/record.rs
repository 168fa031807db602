//! Dynamic entity records
//!
//! A [`Record`] is one resource instance: a mapping from field name to a
//! primitive JSON value (string, number, boolean, null). Records are the
//! common currency between the resource client (wire bodies), the form view
//! (drafts) and the list view (rows). A record with no `id` field is a
//! draft that has not been persisted yet.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientError, ClientResult};

/// The reserved identity field name.
pub const ID_FIELD: &str = "id";

/// One resource instance as a field-name → primitive-value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record (a fresh draft).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field value, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a field as a string slice.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Get a field as a float.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Get a field as an integer.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    /// Get a field as a boolean.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// The entity id, if persisted.
    ///
    /// Servers assign ids; some backends use strings, others integers.
    /// Both normalise to a string here.
    pub fn id(&self) -> Option<String> {
        match self.get(ID_FIELD) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Whether this record has been persisted (carries an id).
    pub fn has_id(&self) -> bool {
        self.id().is_some()
    }

    /// A copy of this record with the `id` field stripped, suitable as a
    /// create payload.
    pub fn without_id(&self) -> Record {
        let mut copy = self.clone();
        copy.remove(ID_FIELD);
        copy
    }

    /// Iterate over all fields.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a record from a JSON value, failing unless it is an object.
    pub fn from_value(value: Value) -> ClientResult<Record> {
        match value {
            Value::Object(map) => Ok(Record(map)),
            other => Err(ClientError::parse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Consume the record into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

/// Short human-readable name for a JSON value kind.
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

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_record_builder() {
        let record = Record::new()
            .with("heading", "Beauty Salon for Women")
            .with("rating", 5)
            .with("is_active", true);

        assert_eq!(record.get_str("heading"), Some("Beauty Salon for Women"));
        assert_eq!(record.get_i64("rating"), Some(5));
        assert_eq!(record.get_bool("is_active"), Some(true));
        assert_eq!(record.get_str("missing"), None);
    }

    #[test]
    fn test_draft_has_no_id() {
        let draft = Record::new().with("title", "Hair Cut");
        assert!(!draft.has_id());
        assert_eq!(draft.id(), None);
    }

    #[test]
    fn test_string_and_numeric_ids_normalise() {
        let with_str = Record::new().with("id", "7");
        assert_eq!(with_str.id(), Some("7".to_string()));

        let with_num = Record::new().with("id", 42);
        assert_eq!(with_num.id(), Some("42".to_string()));

        let empty = Record::new().with("id", "");
        assert_eq!(empty.id(), None);
    }

    #[test]
    fn test_without_id_strips_identity() {
        let record = Record::new().with("id", "9").with("title", "Facial");
        let payload = record.without_id();

        assert!(!payload.has_id());
        assert_eq!(payload.get_str("title"), Some("Facial"));
        // The original is untouched.
        assert!(record.has_id());
    }

    #[test]
    fn test_from_value_requires_object() {
        let ok = Record::from_value(json!({"name": "Home"}));
        assert!(ok.is_ok());

        let err = Record::from_value(json!(["not", "an", "object"])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = Record::new()
            .with("id", "3")
            .with("price", 20.5)
            .with("is_featured", false);

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);

        // Transparent representation: plain JSON object, no wrapper.
        assert!(encoded.starts_with('{'));
    }

    #[test]
    fn test_set_replaces_value() {
        let mut record = Record::new().with("name", "Home");
        record.set("name", "Portfolio");
        assert_eq!(record.get_str("name"), Some("Portfolio"));
        assert_eq!(record.len(), 1);
    }
}
