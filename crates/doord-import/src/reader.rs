use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use doord_types::AccessEvent;
use tracing::{debug, warn};

use crate::error::ImportResult;

/// Column order of an access log row. There is no header line.
const DATE: usize = 0;
const TIME: usize = 1;
const NAME: usize = 2;
const FLAG: usize = 3;

/// Single-pass reader turning access log rows into [`AccessEvent`]s.
///
/// Rows whose date/time do not parse are logged with their raw contents and
/// skipped. Missing trailing columns read as empty strings; extra columns are
/// ignored. The reader owns its source, so iterating again means opening the
/// file again.
pub struct RecordReader<R> {
    records: StringRecordsIntoIter<R>,
    read: u64,
    skipped: u64,
}

impl RecordReader<File> {
    /// Open an access log on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ImportResult<Self> {
        let reader = Self::builder().from_path(path)?;
        Ok(Self::with_records(reader.into_records()))
    }
}

impl<R: io::Read> RecordReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_records(Self::builder().from_reader(source).into_records())
    }

    /// Rows consumed so far, skipped ones included.
    pub fn rows_read(&self) -> u64 {
        self.read
    }

    /// Rows dropped because their timestamp did not parse.
    pub fn rows_skipped(&self) -> u64 {
        self.skipped
    }

    fn normalize(&mut self, record: &StringRecord) -> Option<AccessEvent> {
        let field = |i: usize| record.get(i).unwrap_or("");
        match AccessEvent::from_fields(field(DATE), field(TIME), field(NAME), field(FLAG)) {
            Ok(event) => Some(event),
            Err(e) => {
                self.skipped += 1;
                let line = record.position().map(|p| p.line());
                warn!(?line, row = ?record, error = %e, "error parsing time; skipping row");
                None
            }
        }
    }
}

impl<R> RecordReader<R> {
    fn builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder.has_headers(false).flexible(true);
        builder
    }

    fn with_records(records: StringRecordsIntoIter<R>) -> Self {
        Self {
            records,
            read: 0,
            skipped: 0,
        }
    }
}

impl<R: io::Read> Iterator for RecordReader<R> {
    type Item = ImportResult<AccessEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e.into())),
            };
            self.read += 1;
            if let Some(event) = self.normalize(&record) {
                debug!(name = %event.name, granted = event.access_granted, "row normalized");
                return Some(Ok(event));
            }
        }
    }
}
