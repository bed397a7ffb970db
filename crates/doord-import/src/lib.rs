//! Access log importer for doord.
//!
//! Reads door controller export rows (`date,time,name,flag`), normalizes them
//! into [`AccessEvent`](doord_types::AccessEvent)s and forwards each one, in
//! order and one request at a time, to a doord endpoint. Rows with an
//! unparseable date or time are logged and skipped; the first rejected
//! delivery ends the run.

pub mod config;
pub mod error;
pub mod forwarder;
pub mod pipeline;
pub mod reader;

#[cfg(test)]
mod test_support;

pub use config::ForwarderConfig;
pub use error::{ImportError, ImportResult};
pub use forwarder::{EventTransport, Forwarder, HttpTransport};
pub use pipeline::{run_import, ImportSummary};
pub use reader::RecordReader;
