use std::path::PathBuf;

use ssda_core::{FileStats, ScanMessage, ScanPhase, ScanResult, ScanSnapshot};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Scan in flight
    Scanning,
    /// Final results on screen
    Done,
    /// Scan could not run
    Failed,
}

/// What the scan stream has told the display so far
#[derive(Debug, Clone, Default)]
pub struct ScanView {
    pub phase: Option<ScanPhase>,
    pub total_files: u64,
    /// Highest scaled progress seen; snapshots from different workers can
    /// arrive out of order
    pub progress: u64,
    pub latest: Option<ScanSnapshot>,
}

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Root path being scanned
    pub root_path: PathBuf,
    /// Live progress while scanning
    pub scan: ScanView,
    /// Final aggregate (None while scanning)
    pub stats: Option<FileStats>,
    /// Scan bookkeeping, available once the scan thread has returned
    pub result: Option<ScanResult>,
    /// Rows shown in the top folder/extension lists
    pub top_n: usize,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Whether app should quit
    pub should_quit: bool,
    /// Spinner frame for animation
    pub spinner_frame: usize,
    /// Error message to display
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(root_path: PathBuf, top_n: usize) -> Self {
        Self {
            mode: AppMode::Scanning,
            root_path,
            scan: ScanView::default(),
            stats: None,
            result: None,
            top_n,
            show_help: false,
            should_quit: false,
            spinner_frame: 0,
            error_message: None,
        }
    }

    /// Fold one progress stream message into the state.
    ///
    /// Returns true once the stream has delivered its terminal message.
    pub fn apply(&mut self, msg: ScanMessage) -> bool {
        match msg {
            ScanMessage::Phase(phase) => {
                self.scan.phase = Some(phase);
                false
            }
            ScanMessage::Counted(n) => {
                self.scan.total_files = n;
                false
            }
            ScanMessage::Progress(snapshot) => {
                self.scan.progress = self.scan.progress.max(snapshot.progress);
                self.scan.latest = Some(snapshot);
                false
            }
            ScanMessage::Finished(stats) => {
                self.scan.progress = ssda_core::PROGRESS_SCALE;
                self.stats = Some(*stats);
                false
            }
            ScanMessage::Completed => {
                self.scan.phase = Some(ScanPhase::Done);
                self.mode = AppMode::Done;
                true
            }
            ScanMessage::Cancelled => {
                self.scan.phase = Some(ScanPhase::Cancelled);
                self.quit();
                true
            }
            ScanMessage::Error(e) => {
                self.set_error(e);
                true
            }
        }
    }

    /// Attach the value returned by the scan thread
    pub fn set_result(&mut self, result: ScanResult) {
        // An empty tree finishes without a Finished message
        if self.stats.is_none() {
            self.stats = Some(result.stats.clone());
        }
        self.result = Some(result);
        self.mode = AppMode::Done;
    }

    pub fn set_error(&mut self, message: String) {
        self.scan.phase = Some(ScanPhase::Failed);
        self.error_message = Some(message);
        self.mode = AppMode::Failed;
    }

    /// Progress in `0.0..=1.0`
    pub fn progress_fraction(&self) -> f64 {
        self.scan.progress as f64 / ssda_core::PROGRESS_SCALE as f64
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 10;
    }

    pub fn show_help(&mut self) {
        self.show_help = true;
    }

    pub fn hide_help(&mut self) {
        self.show_help = false;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
