pub mod category;
pub mod error;
pub mod scanner;
pub mod size;
pub mod stats;

pub use category::{Category, classify, extension_of};
pub use error::{Result, ScanError, validate_root};
pub use scanner::{
    CancellationToken, PROGRESS_SCALE, ScanConfig, ScanMessage, ScanPhase, ScanResult,
    ScanSnapshot, Scanner, scaled_progress,
};
pub use size::{format_count, format_size, size_percentage, truncate_path};
pub use stats::{CategoryTotals, ExtensionSize, FileStats, FolderSize};
