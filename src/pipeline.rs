//! Per-request pipeline: read, decode, filter, serialize.

use tracing::debug;

use crate::config::ServerConfig;
use crate::document;
use crate::error::Result;
use crate::filter::{self, FilterSpec};
use crate::query;
use crate::record;

/// Produce the XML body for one request.
///
/// The dataset file is read fresh on every call; nothing is cached.
pub async fn render(config: &ServerConfig, raw_query: Option<&str>) -> Result<String> {
    let spec = query::parse_filter_spec(&query::parse_query(raw_query));
    let bytes = tokio::fs::read(&config.input).await?;
    render_bytes(&bytes, &spec)
}

/// Run the in-memory part of the pipeline on already-read dataset bytes.
pub fn render_bytes(bytes: &[u8], spec: &FilterSpec) -> Result<String> {
    let records = record::decode_records(bytes)?;
    let outputs = filter::filter(&records, spec);
    debug!(
        records = records.len(),
        matched = outputs.len(),
        include_variety = spec.include_variety,
        min_petal_length = ?spec.min_petal_length,
        "filtered dataset"
    );
    Ok(document::serialize(&outputs)?)
}
