#![allow(dead_code)]

use std::path::PathBuf;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use serde_json::Value;
use tempfile::TempDir;

use iris_xml::Record;

/// The two-record dataset used throughout the scenarios
pub const SAMPLE_DATASET: &str = r#"[{"petal.length":1.4,"petal.width":0.2,"variety":"setosa"},{"petal.length":4.7,"petal.width":1.4,"variety":"versicolor"}]"#;

/// A dataset file living in its own temporary directory
pub struct DatasetFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl DatasetFixture {
    pub async fn new(contents: &str) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("iris.json");
        tokio::fs::write(&path, contents).await?;
        Ok(Self { dir, path })
    }
}

/// Build records from a JSON array literal
pub fn records_from(json: Value) -> Vec<Record> {
    json.as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| Record::new(item.as_object().cloned().unwrap_or_default()))
                .collect()
        })
        .unwrap_or_default()
}

/// Parse `xml` to the end, panicking on malformed markup.
///
/// Beyond quick-xml's checks (matching end tags, balanced nesting), every
/// element name must be a plain XML name and every text node must unescape.
pub fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;

    let mut depth = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                assert_element_name(e.name().as_ref(), xml);
                depth += 1;
            }
            Ok(Event::End(e)) => {
                assert_element_name(e.name().as_ref(), xml);
                depth = depth
                    .checked_sub(1)
                    .unwrap_or_else(|| panic!("unbalanced end tag in {:?}", xml));
            }
            Ok(Event::Empty(e)) => assert_element_name(e.name().as_ref(), xml),
            Ok(Event::Text(e)) => {
                let raw = std::str::from_utf8(&e).unwrap();
                if let Err(err) = unescape(raw) {
                    panic!("bad escape {:?} in {:?}: {}", raw, xml, err);
                }
            }
            Ok(_) => {}
            Err(e) => panic!("XML is not well-formed: {} in {:?}", e, xml),
        }
    }
    assert_eq!(depth, 0, "unclosed elements in {:?}", xml);
}

fn assert_element_name(name: &[u8], xml: &str) {
    let name = std::str::from_utf8(name).unwrap();
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));
    assert!(
        valid_start && valid_rest,
        "invalid element name {:?} in {:?}",
        name,
        xml
    );
}

/// Unescaped text of every `<name>` element in document order
pub fn element_texts(xml: &str, name: &str) -> Vec<String> {
    let open = format!("<{}>", name);
    let close = format!("</{}>", name);

    xml.split(open.as_str())
        .skip(1)
        .filter_map(|rest| rest.split(close.as_str()).next())
        .map(|raw| {
            unescape(raw)
                .map(|text| text.into_owned())
                .unwrap_or_else(|e| panic!("bad escape in {:?}: {}", raw, e))
        })
        .collect()
}
