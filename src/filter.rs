//! Filter engine
//!
//! Selects the records that carry a numeric petal length above the optional
//! threshold and projects them into [`OutputRecord`]s, keeping input order.

use serde_json::{Number, Value};

use crate::record::{PETAL_LENGTH, PETAL_WIDTH, Record, VARIETY};

/// Per-request filtering criteria
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterSpec {
    pub include_variety: bool,
    pub min_petal_length: Option<f64>,
}

impl FilterSpec {
    /// Whether a petal length passes the threshold (strictly greater).
    pub fn accepts(&self, petal_length: f64) -> bool {
        match self.min_petal_length {
            Some(min) => petal_length > min,
            None => true,
        }
    }
}

/// Projection of a matching record
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub petal_length: Number,
    /// Copied verbatim; `Value::Null` when the record had no width.
    pub petal_width: Value,
    /// `None` when variety was not requested. When it was requested but the
    /// record lacks it, this holds `Some(Value::Null)`.
    pub variety: Option<Value>,
}

impl OutputRecord {
    fn project(petal_length: Number, record: &Record, spec: &FilterSpec) -> Self {
        Self {
            petal_length,
            petal_width: record.get(PETAL_WIDTH).cloned().unwrap_or(Value::Null),
            variety: spec
                .include_variety
                .then(|| record.get(VARIETY).cloned().unwrap_or(Value::Null)),
        }
    }
}

/// Apply `spec` to `records`, returning projections in input order.
pub fn filter(records: &[Record], spec: &FilterSpec) -> Vec<OutputRecord> {
    records
        .iter()
        .filter_map(|record| {
            let length = numeric_petal_length(record)?;
            let as_f64 = length.as_f64()?;
            spec.accepts(as_f64)
                .then(|| OutputRecord::project(length.clone(), record, spec))
        })
        .collect()
}

fn numeric_petal_length(record: &Record) -> Option<&Number> {
    match record.get(PETAL_LENGTH)? {
        Value::Number(n) => Some(n),
        _ => None,
    }
}
