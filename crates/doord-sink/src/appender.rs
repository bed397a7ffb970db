use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::SinkResult;

/// Single writer for the output file.
///
/// The file is opened in append mode (and created if missing) for every
/// record. The lock is held from open until the flush completes, so one
/// record's bytes and its trailing newline always land together.
pub struct Appender {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Appender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `body` followed by `\n`. Returns the number of bytes written.
    pub async fn append(&self, body: &[u8]) -> SinkResult<usize> {
        let mut record = Vec::with_capacity(body.len() + 1);
        record.extend_from_slice(body);
        record.push(b'\n');

        let _guard = self.lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&record).await?;
        file.flush().await?;

        debug!(path = %self.path.display(), len = record.len(), "record appended");
        Ok(record.len())
    }
}
