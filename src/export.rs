//! CSV export
//!
//! Records are projected through an ordered column list into delimited
//! text and handed to an [`ExportSink`]. Values are joined as-is: an
//! embedded comma shifts the columns of that row.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use crate::dataset::columns::ExportColumn;
use crate::error::{DashboardError, Result};
use crate::model::record::Record;

pub const CSV_MIME_TYPE: &str = "text/csv";

/// Which rows an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    /// Every record in master order
    #[default]
    Full,
    /// The filtered and sorted view, across all pages
    View,
}

impl ExportScope {
    pub fn as_str(&self) -> &str {
        match self {
            ExportScope::Full => "all rows",
            ExportScope::View => "current view",
        }
    }
}

/// A finished export, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub body: String,
    pub row_count: usize,
}

/// Join a header of labels and one line per record
///
/// Lines are separated by `\n` with no trailing newline. Unknown keys
/// produce empty cells.
pub fn to_delimited<'a, R: Record + 'a>(
    records: impl IntoIterator<Item = &'a R>,
    columns: &[ExportColumn],
) -> String {
    let header = columns
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = vec![header];
    for record in records {
        let row = columns
            .iter()
            .map(|c| {
                record
                    .field(&c.key)
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

/// Build an artifact from records and a projection
pub fn build_artifact<'a, R: Record + 'a>(
    file_name: &str,
    records: impl IntoIterator<Item = &'a R>,
    columns: &[ExportColumn],
) -> ExportArtifact {
    let records: Vec<&R> = records.into_iter().collect();
    ExportArtifact {
        file_name: file_name.to_string(),
        mime_type: CSV_MIME_TYPE,
        row_count: records.len(),
        body: to_delimited(records, columns),
    }
}

/// Destination for finished exports
///
/// Saving is fire-and-forget: nothing is reported back to the caller.
/// Sinks that write in the background must be drained with
/// [`FileExportSink::flush`] before the runtime shuts down.
pub trait ExportSink {
    fn save(&self, artifact: ExportArtifact);
}

/// `sellers.csv` → `sellers-20240101-120000.csv`
pub fn timestamped_file_name(file_name: &str, at: &NaiveDateTime) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let stamp = at.format("%Y%m%d-%H%M%S");

    match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}-{}", stem, stamp),
    }
}

/// Outcome of draining pending writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlushReport {
    pub written: usize,
    pub failed: usize,
    /// Still running when the timeout hit; aborted
    pub abandoned: usize,
}

/// Writes exports into a directory on background tasks
///
/// Writes started by [`ExportSink::save`] are tracked until
/// [`flush`](Self::flush) drains them. Clones share the pending set.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    dir: PathBuf,
    timestamped: bool,
    pending: Arc<Mutex<JoinSet<Result<PathBuf>>>>,
}

impl FileExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            timestamped: false,
            pending: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    pub fn timestamped(mut self, enabled: bool) -> Self {
        self.timestamped = enabled;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where an artifact will be written
    pub fn target_path(&self, artifact: &ExportArtifact, now: &NaiveDateTime) -> PathBuf {
        if self.timestamped {
            self.dir.join(timestamped_file_name(&artifact.file_name, now))
        } else {
            self.dir.join(&artifact.file_name)
        }
    }

    /// Spawn the write and return its handle
    ///
    /// Must be called from within a tokio runtime. Failures are logged
    /// and also surfaced through the handle for callers that want them.
    /// The write is not tracked by [`flush`](Self::flush).
    pub fn spawn_write(&self, artifact: ExportArtifact) -> JoinHandle<Result<PathBuf>> {
        tokio::spawn(self.write_task(artifact))
    }

    /// Number of tracked writes not yet drained
    pub fn pending_len(&self) -> usize {
        self.lock_pending().len()
    }

    /// Wait for tracked writes, aborting whatever is left after `timeout`
    pub async fn flush(&self, timeout: Duration) -> FlushReport {
        let mut pending = std::mem::take(&mut *self.lock_pending());
        let mut report = FlushReport::default();

        let drained = tokio::time::timeout(timeout, async {
            while let Some(joined) = pending.join_next().await {
                match joined {
                    Ok(Ok(_)) => report.written += 1,
                    Ok(Err(_)) => report.failed += 1,
                    Err(e) => {
                        warn!("Export task did not finish: {}", e);
                        report.failed += 1;
                    }
                }
            }
        })
        .await;

        if drained.is_err() {
            report.abandoned = pending.len();
            warn!(
                "Gave up on {} export(s) after {:?}",
                report.abandoned, timeout
            );
            pending.abort_all();
        }
        debug!("Flushed exports: {:?}", report);
        report
    }

    fn lock_pending(&self) -> MutexGuard<'_, JoinSet<Result<PathBuf>>> {
        // A panic while holding the lock leaves the set itself intact
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_task(&self, artifact: ExportArtifact) -> impl Future<Output = Result<PathBuf>> {
        let dir = self.dir.clone();
        let path = self.target_path(&artifact, &chrono::Local::now().naive_local());

        async move {
            let result = write_artifact(&dir, &path, &artifact.body).await;
            match &result {
                Ok(_) => info!(
                    "Exported {} rows to {}",
                    artifact.row_count,
                    path.display()
                ),
                Err(e) => warn!("Export to {} failed: {}", path.display(), e),
            }
            result
        }
    }
}

async fn write_artifact(dir: &Path, path: &Path, body: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| DashboardError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    tokio::fs::write(path, body)
        .await
        .map_err(|source| DashboardError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(path.to_path_buf())
}

impl ExportSink for FileExportSink {
    fn save(&self, artifact: ExportArtifact) {
        let task = self.write_task(artifact);
        self.lock_pending().spawn(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_timestamped_file_name() {
        assert_eq!(
            timestamped_file_name("sellers.csv", &at()),
            "sellers-20240101-120000.csv"
        );
        assert_eq!(
            timestamped_file_name("top-customers.csv", &at()),
            "top-customers-20240101-120000.csv"
        );
        assert_eq!(timestamped_file_name("plain", &at()), "plain-20240101-120000");
    }

    #[test]
    fn test_target_path_respects_timestamp_flag() {
        let artifact = ExportArtifact {
            file_name: "products.csv".to_string(),
            mime_type: CSV_MIME_TYPE,
            body: String::new(),
            row_count: 0,
        };
        let plain = FileExportSink::new("/tmp/out");
        assert_eq!(
            plain.target_path(&artifact, &at()),
            PathBuf::from("/tmp/out/products.csv")
        );
        let stamped = FileExportSink::new("/tmp/out").timestamped(true);
        assert_eq!(
            stamped.target_path(&artifact, &at()),
            PathBuf::from("/tmp/out/products-20240101-120000.csv")
        );
    }
}
