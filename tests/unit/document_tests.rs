//! Unit tests for XML document rendering

use serde_json::{Number, Value, json};

use iris_xml::{OutputRecord, serialize};

use crate::common::test_helpers::{assert_well_formed, element_texts};

fn output(length: f64, width: Value, variety: Option<Value>) -> OutputRecord {
    OutputRecord {
        petal_length: Number::from_f64(length).unwrap(),
        petal_width: width,
        variety,
    }
}

#[test]
fn test_empty_document_is_well_formed() {
    let xml = serialize(&[]).unwrap();
    assert_well_formed(&xml);
    assert!(xml.starts_with("<irises>"));
    assert!(xml.trim_end().ends_with("</irises>"));
    assert!(!xml.contains("<flower>"));
}

#[test]
fn test_two_space_indentation() {
    let xml = serialize(&[output(1.5, json!(0.3), Some(json!("setosa")))]).unwrap();
    let lines: Vec<&str> = xml.lines().collect();
    assert_eq!(
        lines,
        vec![
            "<irises>",
            "  <flower>",
            "    <petal_length>1.5</petal_length>",
            "    <petal_width>0.3</petal_width>",
            "    <variety>setosa</variety>",
            "  </flower>",
            "</irises>",
        ]
    );
}

#[test]
fn test_integral_and_fractional_measurements() {
    let records = vec![
        OutputRecord {
            petal_length: Number::from(4),
            petal_width: json!(1),
            variety: None,
        },
        output(4.25, json!(1.75), None),
        output(6.0, json!(2.0), None),
    ];
    let xml = serialize(&records).unwrap();

    assert_eq!(element_texts(&xml, "petal_length"), vec!["4", "4.25", "6"]);
    assert_eq!(element_texts(&xml, "petal_width"), vec!["1", "1.75", "2"]);
}

#[test]
fn test_escaping_round_trip() {
    let nasty = r#"<script>alert("x") & 'y'</script>"#;
    let xml = serialize(&[output(1.0, json!(1.0), Some(json!(nasty)))]).unwrap();

    assert_well_formed(&xml);
    assert!(!xml.contains("<script>"));
    assert_eq!(element_texts(&xml, "variety"), vec![nasty.to_string()]);
}

#[test]
fn test_requested_but_missing_variety_is_not_emitted() {
    let xml = serialize(&[
        output(1.0, json!(1.0), Some(Value::Null)),
        output(2.0, json!(1.0), Some(json!("virginica"))),
    ])
    .unwrap();

    assert_well_formed(&xml);
    assert_eq!(element_texts(&xml, "variety"), vec!["virginica"]);
    assert!(!xml.contains("<variety/>"));
}

#[test]
fn test_object_variety_with_markup_key_stays_well_formed() {
    let xml = serialize(&[output(
        1.0,
        json!(1.0),
        Some(json!({"a<b": "x", "grade": "a&b"})),
    )])
    .unwrap();

    assert_well_formed(&xml);
    assert!(!xml.contains("a<b"));
    assert_eq!(element_texts(&xml, "grade"), vec!["a&b"]);
}

#[test]
#[should_panic(expected = "invalid element name")]
fn test_well_formed_check_rejects_bad_names() {
    assert_well_formed("<irises><a<b>x</a<b></irises>");
}
