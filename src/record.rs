//! Input records
//!
//! The dataset is a JSON array of loosely typed objects keyed by dotted
//! field names. Records stay in this untyped form until the filter engine
//! narrows them into [`OutputRecord`](crate::filter::OutputRecord)s.

use serde_json::{Map, Value};

use crate::error::ProcessingError;

pub const PETAL_LENGTH: &str = "petal.length";
pub const PETAL_WIDTH: &str = "petal.width";
pub const VARIETY: &str = "variety";

/// One input row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Decode raw dataset bytes into records, preserving file order.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before parsing.
///
/// Elements that are neither objects nor `null` are kept as empty records
/// so that the type guard excludes them; a `null` element is an error.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Record>, ProcessingError> {
    let text = String::from_utf8_lossy(bytes);
    let value: Value = serde_json::from_str(&text)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ProcessingError::NotASequence {
                found: json_type_name(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(Record::new(fields)),
            Value::Null => Err(ProcessingError::NullRecord { index }),
            _ => Ok(Record::default()),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
