//! XML document rendering
//!
//! Writes filtered records as an indented `<irises>` document:
//!
//! ```text
//! <irises>
//!   <flower>
//!     <petal_length>4.7</petal_length>
//!     <petal_width>1.4</petal_width>
//!     <variety>versicolor</variety>
//!   </flower>
//! </irises>
//! ```
//!
//! Leaves with no content (`null`, empty strings, empty containers) are left
//! out entirely, as are object members whose key is not a usable element
//! name. The `<irises>` wrapper is always written.

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::filter::OutputRecord;

pub const ROOT_ELEMENT: &str = "irises";
pub const ITEM_ELEMENT: &str = "flower";
pub const PETAL_LENGTH_ELEMENT: &str = "petal_length";
pub const PETAL_WIDTH_ELEMENT: &str = "petal_width";
pub const VARIETY_ELEMENT: &str = "variety";

const INDENT_SIZE: usize = 2;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("XML write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("XML output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render `outputs` as an XML document string.
pub fn serialize(outputs: &[OutputRecord]) -> Result<String, DocumentError> {
    let mut writer = DocumentWriter::new(Vec::new());
    writer.write_document(outputs)?;
    let mut text = String::from_utf8(writer.into_inner())?;
    text.push('\n');
    Ok(text)
}

struct DocumentWriter {
    writer: Writer<Vec<u8>>,
}

impl DocumentWriter {
    fn new(buffer: Vec<u8>) -> Self {
        Self {
            writer: Writer::new_with_indent(buffer, b' ', INDENT_SIZE),
        }
    }

    fn into_inner(self) -> Vec<u8> {
        self.writer.into_inner()
    }

    fn write_document(&mut self, outputs: &[OutputRecord]) -> Result<(), DocumentError> {
        self.start(ROOT_ELEMENT)?;
        for output in outputs {
            self.write_item(output)?;
        }
        self.end(ROOT_ELEMENT)
    }

    fn write_item(&mut self, output: &OutputRecord) -> Result<(), DocumentError> {
        self.start(ITEM_ELEMENT)?;
        self.write_leaf(PETAL_LENGTH_ELEMENT, &format_number(&output.petal_length))?;
        self.write_value(PETAL_WIDTH_ELEMENT, &output.petal_width)?;
        if let Some(variety) = &output.variety {
            self.write_value(VARIETY_ELEMENT, variety)?;
        }
        self.end(ITEM_ELEMENT)
    }

    fn write_value(&mut self, name: &str, value: &Value) -> Result<(), DocumentError> {
        match value {
            Value::Null => Ok(()),
            Value::Bool(b) => self.write_leaf(name, if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_leaf(name, &format_number(n)),
            Value::String(s) => self.write_leaf(name, s),
            Value::Array(items) => {
                for item in items {
                    self.write_value(name, item)?;
                }
                Ok(())
            }
            Value::Object(fields) => {
                if !has_content(value) {
                    return Ok(());
                }
                self.start(name)?;
                for (key, field) in fields {
                    if is_element_name(key) {
                        self.write_value(key, field)?;
                    }
                }
                self.end(name)
            }
        }
    }

    fn write_leaf(&mut self, name: &str, text: &str) -> Result<(), DocumentError> {
        if text.is_empty() {
            return Ok(());
        }
        self.start(name)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(escape(text))))?;
        self.end(name)
    }

    fn start(&mut self, name: &str) -> Result<(), DocumentError> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), DocumentError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}

/// Whether a value produces at least one element when written.
fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
        Value::Array(items) => items.iter().any(has_content),
        Value::Object(fields) => fields
            .iter()
            .any(|(key, field)| is_element_name(key) && has_content(field)),
    }
}

/// Whether `name` can be written as an element name without escaping.
///
/// Accepts letters and `_` first, then letters, digits, `_`, `-` and `.`.
/// Colons are rejected since no namespaces are declared.
fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Format a JSON number without locale grouping or a forced decimal point.
///
/// Integers print as integers; floats use the shortest round-trip form, so
/// `5.0` prints as `5` and `1.4` as `1.4`.
pub fn format_number(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else if let Some(f) = number.as_f64() {
        f.to_string()
    } else {
        number.to_string()
    }
}
