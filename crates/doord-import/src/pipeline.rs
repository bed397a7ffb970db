use std::io;

use tracing::info;

use crate::error::ImportResult;
use crate::forwarder::{EventTransport, Forwarder};
use crate::reader::RecordReader;

/// Counters for a completed import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub read: u64,
    pub sent: u64,
    pub skipped: u64,
}

/// Drive one import pass: every parsed row is forwarded before the next row
/// is read. Stops at the first source, transport or delivery error.
pub fn run_import<R, T>(mut reader: RecordReader<R>, forwarder: &Forwarder<T>) -> ImportResult<ImportSummary>
where
    R: io::Read,
    T: EventTransport,
{
    let mut sent = 0;
    for event in reader.by_ref() {
        forwarder.forward(&event?)?;
        sent += 1;
    }

    let summary = ImportSummary {
        read: reader.rows_read(),
        sent,
        skipped: reader.rows_skipped(),
    };
    info!(read = summary.read, sent = summary.sent, skipped = summary.skipped, "import complete");
    Ok(summary)
}
