//! Query parameter parsing
//!
//! Turns the request query string into a [`FilterSpec`]. Parsing never fails:
//! absent or malformed values fall back to the defaults.

use std::collections::HashMap;

use crate::filter::FilterSpec;

pub const VARIETY_PARAM: &str = "variety";
pub const MIN_PETAL_LENGTH_PARAM: &str = "min_petal_length";

/// Decode a raw query string into a name -> value map.
///
/// A name given more than once keeps all of its values joined by `,`.
pub fn parse_query(raw: Option<&str>) -> HashMap<String, String> {
    let mut params: HashMap<String, String> = HashMap::new();

    for (name, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
        params
            .entry(name.into_owned())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }

    params
}

/// Build the filter criteria from decoded query parameters.
pub fn parse_filter_spec(params: &HashMap<String, String>) -> FilterSpec {
    let include_variety = params
        .get(VARIETY_PARAM)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));

    let min_petal_length = params
        .get(MIN_PETAL_LENGTH_PARAM)
        .filter(|v| !v.is_empty())
        .and_then(|v| coerce_number(v))
        .filter(|n| !n.is_nan());

    FilterSpec {
        include_variety,
        min_petal_length,
    }
}

/// Convert text to a number the lenient way browsers and JSON tooling do.
///
/// Returns `None` for text that is not a number.
pub fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return Some(value);
    }

    // Rust accepts "inf", "nan" and friends; those are not numbers here.
    let is_decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
