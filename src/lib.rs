//! # iris-xml Library
//!
//! A small async HTTP service that reads a JSON dataset of iris flower
//! measurements on every request, filters it by query parameters and
//! returns the result as an indented XML document.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod server;

pub use cli::{Cli, VerbosityLevel};
pub use config::{ConfigError, ServerConfig};
pub use document::{DocumentError, serialize};
pub use error::{ErrorKind, ProcessingError, ServiceError};
pub use filter::{FilterSpec, OutputRecord, filter};
pub use query::{parse_filter_spec, parse_query};
pub use record::{Record, decode_records};
