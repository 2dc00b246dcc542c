use crate::stats::{CategoryTotals, FileStats};

/// Upper end of the scaled progress range; reached only by the final snapshot.
pub const PROGRESS_SCALE: u64 = 1_000_000;

/// Scan state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    NotStarted,
    /// First pass: counting files
    Counting,
    /// Second pass: workers stat and classify files
    Processing,
    /// Combining worker aggregates
    Merging,
    Done,
    Failed,
    Cancelled,
}

impl ScanPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Starting",
            Self::Counting => "Counting files",
            Self::Processing => "Scanning files",
            Self::Merging => "Merging results",
            Self::Done => "Done",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Message on the progress stream, engine to presentation
#[derive(Debug, Clone)]
pub enum ScanMessage {
    /// The engine entered a new phase
    Phase(ScanPhase),
    /// Number of files found by the counting pass
    Counted(u64),
    /// Periodic snapshot from one worker
    Progress(ScanSnapshot),
    /// Merged result; the scan is at 100%. Sent at most once.
    Finished(Box<FileStats>),
    /// Scan completed. Always the last message of a successful scan.
    Completed,
    /// Scan was cancelled
    Cancelled,
    /// Scan could not start
    Error(String),
}

/// Immutable copy of one worker's local state at emission time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSnapshot {
    /// Index of the emitting worker
    pub worker: usize,
    /// The worker's own cumulative category totals, in bytes
    pub totals: CategoryTotals,
    /// Files processed by all workers when the snapshot was taken
    pub processed: u64,
    /// Files found by the counting pass
    pub total_files: u64,
    /// `processed / total_files` scaled to `0..=PROGRESS_SCALE`, truncated
    pub progress: u64,
}

/// Scale `processed / total` into `0..=PROGRESS_SCALE`.
///
/// Clamped because files created between the two passes can push
/// `processed` past the counted total.
pub fn scaled_progress(processed: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = processed as u128 * PROGRESS_SCALE as u128 / total as u128;
    scaled.min(PROGRESS_SCALE as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_progress() {
        assert_eq!(scaled_progress(0, 10), 0);
        assert_eq!(scaled_progress(5, 10), 500_000);
        assert_eq!(scaled_progress(1, 3), 333_333);
        assert_eq!(scaled_progress(10, 10), PROGRESS_SCALE);
        assert_eq!(scaled_progress(12, 10), PROGRESS_SCALE);
        assert_eq!(scaled_progress(3, 0), 0);
        assert_eq!(scaled_progress(u64::MAX, u64::MAX), PROGRESS_SCALE);
    }
}
