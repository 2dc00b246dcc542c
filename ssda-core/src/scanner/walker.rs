use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::Sender;
use jwalk::WalkDir;

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Number of worker threads (0 = auto)
    pub num_threads: usize,
    /// Capacity of the path queue between the walker and the workers
    pub queue_capacity: usize,
    /// Capacity of the progress stream
    pub progress_capacity: usize,
    /// Each worker emits a snapshot after this many processed files
    pub progress_interval: u64,
    /// Follow symbolic links while walking
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            num_threads: 0, // auto
            queue_capacity: 10_000,
            progress_capacity: 4_096,
            progress_interval: 5,
            follow_symlinks: false,
        }
    }
}

impl ScanConfig {
    /// Worker pool size with `0` resolved to the host parallelism.
    pub fn worker_count(&self) -> usize {
        if self.num_threads > 0 {
            self.num_threads
        } else {
            num_cpus::get().max(1)
        }
    }
}

/// Cancellation token for stopping scans
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk `root` on the calling thread and yield every non-directory path.
///
/// Walk errors (unreadable subdirectories, entries vanishing mid-walk) are
/// skipped. Iteration stops early once `cancel` fires.
fn file_paths(
    root: &Path,
    config: &ScanConfig,
    cancel: &CancellationToken,
) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(config.follow_symlinks)
        .sort(false)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .take_while(move |_| !cancel.is_cancelled())
        .filter_map(|entry| entry.ok())
        .filter(|entry| !entry.file_type().is_dir())
        .map(|entry| entry.path())
}

/// First pass: count the files under `root`.
///
/// Returns `None` if the walk was cancelled.
pub(crate) fn count_files(
    root: &Path,
    config: &ScanConfig,
    cancel: &CancellationToken,
) -> Option<u64> {
    let count = file_paths(root, config, cancel).count() as u64;
    if cancel.is_cancelled() {
        None
    } else {
        Some(count)
    }
}

/// Second pass: push every file path into the work queue.
///
/// Blocks whenever the queue is full. Dropping `queue` on return closes it,
/// which is how workers learn the walk is over. Returns the number of paths
/// sent.
pub(crate) fn feed_paths(
    root: &Path,
    config: &ScanConfig,
    cancel: &CancellationToken,
    queue: Sender<PathBuf>,
) -> u64 {
    let mut sent = 0;
    for path in file_paths(root, config, cancel) {
        // All workers gone: nothing left to feed
        if queue.send(path).is_err() {
            break;
        }
        sent += 1;
    }
    sent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file1.txt"), "hello").unwrap();
        fs::write(temp.path().join(".hidden"), "x").unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();
        fs::write(temp.path().join("subdir/file3.txt"), "test").unwrap();
        temp
    }

    #[test]
    fn test_count_files_skips_directories() {
        let temp = fixture();
        let count = count_files(temp.path(), &ScanConfig::default(), &CancellationToken::new());
        assert_eq!(count, Some(3));
    }

    #[test]
    fn test_count_files_empty_dir() {
        let temp = TempDir::new().unwrap();
        let count = count_files(temp.path(), &ScanConfig::default(), &CancellationToken::new());
        assert_eq!(count, Some(0));
    }

    #[test]
    fn test_count_files_cancelled() {
        let temp = fixture();
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(count_files(temp.path(), &ScanConfig::default(), &cancel), None);
    }

    #[test]
    fn test_feed_paths_sends_every_file() {
        let temp = fixture();
        let (tx, rx) = crossbeam_channel::unbounded();
        let sent = feed_paths(temp.path(), &ScanConfig::default(), &CancellationToken::new(), tx);
        assert_eq!(sent, 3);

        let mut paths: Vec<PathBuf> = rx.iter().collect();
        paths.sort();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.is_file()));
        assert!(paths.contains(&temp.path().join("subdir/file3.txt")));
    }

    #[test]
    fn test_feed_paths_stops_when_cancelled() {
        let temp = fixture();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let (tx, rx) = crossbeam_channel::unbounded();

        let sent = feed_paths(temp.path(), &ScanConfig::default(), &cancel, tx);
        assert_eq!(sent, 0);
        assert_eq!(rx.iter().count(), 0);
    }

    #[test]
    fn test_worker_count() {
        let config = ScanConfig {
            num_threads: 3,
            ..Default::default()
        };
        assert_eq!(config.worker_count(), 3);
        assert!(ScanConfig::default().worker_count() >= 1);
    }
}
