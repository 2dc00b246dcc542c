mod engine;
mod progress;
mod walker;
mod worker;

pub use engine::{ScanResult, Scanner};
pub use progress::{PROGRESS_SCALE, ScanMessage, ScanPhase, ScanSnapshot, scaled_progress};
pub use walker::{CancellationToken, ScanConfig};
