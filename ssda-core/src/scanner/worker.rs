use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::progress::{ScanMessage, ScanSnapshot, scaled_progress};
use super::walker::CancellationToken;
use crate::category::{classify, extension_of};
use crate::stats::{FileStats, FolderSize};

/// Bytes per containing folder, shared by all workers.
#[derive(Debug, Clone, Default)]
pub(crate) struct FolderSizes {
    inner: Arc<Mutex<HashMap<PathBuf, u64>>>,
}

impl FolderSizes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add `size` bytes to `dir`, creating the entry on first use.
    pub(crate) fn add(&self, dir: &Path, size: u64) {
        let mut map = self.inner.lock();
        match map.get_mut(dir) {
            Some(total) => *total += size,
            None => {
                map.insert(dir.to_path_buf(), size);
            }
        }
    }

    /// Snapshot of the map as a list ordered by path.
    pub(crate) fn to_sorted_vec(&self) -> Vec<FolderSize> {
        let map = self.inner.lock();
        let mut folders: Vec<FolderSize> = map
            .iter()
            .map(|(path, &size)| FolderSize {
                path: path.clone(),
                size,
            })
            .collect();
        folders.sort_by(|a, b| a.path.cmp(&b.path));
        folders
    }
}

/// What a worker hands back once the queue is drained
#[derive(Debug, Default)]
pub(crate) struct WorkerOutput {
    pub stats: FileStats,
    pub processed: u64,
    pub skipped: u64,
}

/// One member of the worker pool.
pub(crate) struct Worker {
    pub index: usize,
    pub queue: Receiver<PathBuf>,
    pub progress: Sender<ScanMessage>,
    pub folders: FolderSizes,
    /// Files processed by the whole pool
    pub processed_total: Arc<AtomicU64>,
    pub total_files: u64,
    pub interval: u64,
    pub cancel: CancellationToken,
}

impl Worker {
    /// Consume paths until the queue closes or the scan is cancelled.
    pub(crate) fn run(self) -> WorkerOutput {
        let interval = self.interval.max(1);
        let mut out = WorkerOutput::default();

        while !self.cancel.is_cancelled() {
            let Ok(path) = self.queue.recv() else {
                break;
            };

            let metadata = match std::fs::metadata(&path) {
                Ok(m) if !m.is_dir() => m,
                Ok(_) => {
                    trace!(path = %path.display(), "skipping directory in file queue");
                    out.skipped += 1;
                    continue;
                }
                Err(e) => {
                    trace!(path = %path.display(), error = %e, "skipping unreadable file");
                    out.skipped += 1;
                    continue;
                }
            };

            let size = metadata.len();
            let extension = extension_of(&path);
            out.stats.record(&extension, classify(&extension), size);

            if let Some(dir) = path.parent() {
                self.folders.add(dir, size);
            }

            out.processed += 1;
            let processed = self.processed_total.fetch_add(1, Ordering::Relaxed) + 1;

            if out.processed % interval == 0 {
                let snapshot = ScanSnapshot {
                    worker: self.index,
                    totals: out.stats.totals,
                    processed,
                    total_files: self.total_files,
                    progress: scaled_progress(processed, self.total_files),
                };
                // A full stream drops the snapshot rather than stalling the scan
                let _ = self.progress.try_send(ScanMessage::Progress(snapshot));
            }
        }

        debug!(
            worker = self.index,
            processed = out.processed,
            skipped = out.skipped,
            "worker finished"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_folder_sizes_accumulate() {
        let folders = FolderSizes::new();
        folders.add(Path::new("/b"), 5);
        folders.add(Path::new("/a"), 1);
        folders.add(Path::new("/b"), 7);

        let list = folders.to_sorted_vec();
        assert_eq!(
            list,
            vec![
                FolderSize { path: PathBuf::from("/a"), size: 1 },
                FolderSize { path: PathBuf::from("/b"), size: 12 },
            ]
        );
    }

    #[test]
    fn test_worker_processes_and_skips() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.png"), vec![0u8; 10]).unwrap();
        fs::write(temp.path().join("b.weird"), vec![0u8; 4]).unwrap();
        fs::create_dir(temp.path().join("dir")).unwrap();

        let (path_tx, path_rx) = crossbeam_channel::unbounded();
        let (progress_tx, progress_rx) = crossbeam_channel::unbounded();
        path_tx.send(temp.path().join("a.png")).unwrap();
        path_tx.send(temp.path().join("b.weird")).unwrap();
        path_tx.send(temp.path().join("dir")).unwrap();
        path_tx.send(temp.path().join("vanished.txt")).unwrap();
        drop(path_tx);

        let folders = FolderSizes::new();
        let worker = Worker {
            index: 0,
            queue: path_rx,
            progress: progress_tx,
            folders: folders.clone(),
            processed_total: Arc::new(AtomicU64::new(0)),
            total_files: 4,
            interval: 1,
            cancel: CancellationToken::new(),
        };
        let out = worker.run();

        assert_eq!(out.processed, 2);
        assert_eq!(out.skipped, 2);
        assert_eq!(out.stats.totals.photos, 10);
        assert_eq!(out.stats.totals.others, 4);
        assert_eq!(out.stats.totals.total, 14);
        assert_eq!(out.stats.other_extensions.get(".weird"), Some(&4));
        assert_eq!(folders.to_sorted_vec()[0].size, 14);

        let snapshots: Vec<ScanSnapshot> = progress_rx
            .try_iter()
            .filter_map(|m| match m {
                ScanMessage::Progress(s) => Some(s),
                _ => None,
            })
            .collect();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].progress, 250_000);
        assert_eq!(snapshots[1].progress, 500_000);
        assert_eq!(snapshots[1].totals.total, 14);
    }

    #[test]
    fn test_worker_stops_when_cancelled() {
        let (path_tx, path_rx) = crossbeam_channel::unbounded();
        let (progress_tx, _progress_rx) = crossbeam_channel::unbounded();
        path_tx.send(PathBuf::from("/does/not/matter")).unwrap();

        let cancel = CancellationToken::new();
        cancel.cancel();
        let worker = Worker {
            index: 0,
            queue: path_rx.clone(),
            progress: progress_tx,
            folders: FolderSizes::new(),
            processed_total: Arc::new(AtomicU64::new(0)),
            total_files: 1,
            interval: 5,
            cancel,
        };
        let out = worker.run();
        assert_eq!(out.processed, 0);
        assert_eq!(out.skipped, 0);
        // The queued path was never taken
        assert_eq!(path_rx.len(), 1);
    }
}
