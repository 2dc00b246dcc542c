use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info, warn};

use super::progress::{ScanMessage, ScanPhase};
use super::walker::{CancellationToken, ScanConfig, count_files, feed_paths};
use super::worker::{FolderSizes, Worker, WorkerOutput};
use crate::error::{Result, ScanError, validate_root};
use crate::stats::FileStats;

/// Outcome of a finished scan
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Merged aggregate; `stats.totals.total` is the real byte total
    pub stats: FileStats,
    /// Files found by the counting pass
    pub files_counted: u64,
    /// Files classified and accounted
    pub files_processed: u64,
    /// Files that could not be read or turned out to be directories
    pub files_skipped: u64,
    pub duration: Duration,
}

/// Two-pass scan-and-aggregate engine
pub struct Scanner {
    config: ScanConfig,
    cancel_token: CancellationToken,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    /// Scan a directory in the background.
    ///
    /// Returns the progress stream and the handle yielding the result.
    pub fn scan(
        self,
        root_path: PathBuf,
    ) -> (Receiver<ScanMessage>, thread::JoinHandle<Result<ScanResult>>) {
        let (tx, rx) = crossbeam_channel::bounded(self.config.progress_capacity.max(1));

        let handle = thread::spawn(move || self.scan_sync(root_path, tx));

        (rx, handle)
    }

    /// Synchronous scan (runs in thread)
    pub fn scan_sync(self, root_path: PathBuf, tx: Sender<ScanMessage>) -> Result<ScanResult> {
        let start = Instant::now();
        let root_path = root_path.canonicalize().unwrap_or(root_path);

        if let Err(e) = validate_root(&root_path) {
            warn!(root = %root_path.display(), error = %e, "cannot scan root");
            let _ = tx.send(ScanMessage::Error(e.to_string()));
            return Err(e);
        }

        let worker_count = self.config.worker_count();
        info!(root = %root_path.display(), workers = worker_count, "starting scan");

        let _ = tx.send(ScanMessage::Phase(ScanPhase::Counting));
        let Some(total_files) = count_files(&root_path, &self.config, &self.cancel_token) else {
            return self.cancelled(&tx);
        };
        debug!(files = total_files, "counting pass finished");

        if total_files == 0 {
            let _ = tx.send(ScanMessage::Completed);
            return Ok(ScanResult {
                duration: start.elapsed(),
                ..Default::default()
            });
        }

        let _ = tx.send(ScanMessage::Counted(total_files));
        let _ = tx.send(ScanMessage::Phase(ScanPhase::Processing));

        let folders = FolderSizes::new();
        let processed_total = Arc::new(AtomicU64::new(0));

        let outputs = thread::scope(|s| -> Result<Vec<WorkerOutput>> {
            let (path_tx, path_rx) = crossbeam_channel::bounded(self.config.queue_capacity.max(1));

            let workers: Vec<_> = (0..worker_count)
                .map(|index| {
                    let worker = Worker {
                        index,
                        queue: path_rx.clone(),
                        progress: tx.clone(),
                        folders: folders.clone(),
                        processed_total: Arc::clone(&processed_total),
                        total_files,
                        interval: self.config.progress_interval,
                        cancel: self.cancel_token.clone(),
                    };
                    s.spawn(move || worker.run())
                })
                .collect();
            // Only workers may hold the receiving side, so the producer
            // unblocks if every worker exits early
            drop(path_rx);

            let root = &root_path;
            let config = &self.config;
            let cancel = &self.cancel_token;
            let producer = s.spawn(move || feed_paths(root, config, cancel, path_tx));

            let sent = producer.join().map_err(|_| ScanError::WorkerPanicked)?;
            debug!(paths = sent, "producer finished");

            workers
                .into_iter()
                .map(|h| h.join().map_err(|_| ScanError::WorkerPanicked))
                .collect()
        })?;

        let _ = tx.send(ScanMessage::Phase(ScanPhase::Merging));

        // Checked after the phase message so a stop requested while it was
        // waiting for room on the stream still wins over the result
        if self.cancel_token.is_cancelled() {
            return self.cancelled(&tx);
        }

        let mut result = ScanResult {
            files_counted: total_files,
            ..Default::default()
        };
        for output in &outputs {
            result.stats.merge(&output.stats);
            result.files_processed += output.processed;
            result.files_skipped += output.skipped;
        }
        // Every worker has exited, the map is no longer contended
        result.stats.folder_sizes = folders.to_sorted_vec();
        result.duration = start.elapsed();

        let _ = tx.send(ScanMessage::Finished(Box::new(result.stats.clone())));
        let _ = tx.send(ScanMessage::Completed);

        info!(
            files = result.files_processed,
            skipped = result.files_skipped,
            bytes = result.stats.totals.total,
            elapsed_ms = result.duration.as_millis() as u64,
            "scan complete"
        );

        Ok(result)
    }

    fn cancelled(&self, tx: &Sender<ScanMessage>) -> Result<ScanResult> {
        info!("scan cancelled");
        let _ = tx.send(ScanMessage::Cancelled);
        Err(ScanError::Cancelled)
    }
}
