// Run with: cargo run --example debug_scan -- /path/to/scan

use ssda_core::{ScanConfig, ScanMessage, Scanner, format_size};
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("Scanning: {:?}", path);

    let scanner = Scanner::new(ScanConfig::default());
    let (rx, handle) = scanner.scan(path);

    let start = Instant::now();
    let mut snapshots = 0u64;
    let mut last_progress = 0u64;
    let mut regressions = 0u64;

    for msg in rx {
        let elapsed = start.elapsed().as_secs_f64();
        match msg {
            ScanMessage::Phase(phase) => println!("[{:>6.2}s] PHASE {}", elapsed, phase.label()),
            ScanMessage::Counted(n) => println!("[{:>6.2}s] COUNTED {} files", elapsed, n),
            ScanMessage::Progress(s) => {
                snapshots += 1;
                if s.progress < last_progress {
                    regressions += 1;
                }
                last_progress = s.progress;
                println!(
                    "[{:>6.2}s] worker={:<3} processed={:<8}/{:<8} progress={:<7} local_bytes={}",
                    elapsed,
                    s.worker,
                    s.processed,
                    s.total_files,
                    s.progress,
                    s.totals.total
                );
            }
            ScanMessage::Finished(stats) => {
                println!("[{:>6.2}s] FINISHED total={}", elapsed, stats.totals.total)
            }
            ScanMessage::Completed => println!("[{:>6.2}s] COMPLETED", elapsed),
            ScanMessage::Cancelled => println!("[{:>6.2}s] CANCELLED", elapsed),
            ScanMessage::Error(e) => println!("[{:>6.2}s] ERROR: {}", elapsed, e),
        }
    }

    match handle.join() {
        Ok(Ok(result)) => println!(
            "\nFinal: {} files ({} skipped), {} total, {} snapshots, {} out-of-order",
            result.files_processed,
            result.files_skipped,
            format_size(result.stats.totals.total),
            snapshots,
            regressions
        ),
        Ok(Err(e)) => println!("\nScan failed: {}", e),
        Err(_) => println!("\nScan thread panicked"),
    }
}
