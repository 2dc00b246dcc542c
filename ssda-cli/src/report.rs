use std::fmt::Write;

use ssda_core::{
    Category, FileStats, ScanResult, format_count, format_size, size_percentage, truncate_path,
};

use crate::ui::NO_EXTENSION;
use crate::ui::bar_chart::render_text_bar;

const BAR_WIDTH: usize = 30;
const PATH_WIDTH: usize = 40;

/// Render the final scan result the way the interactive view lays it out
pub fn render_report(result: &ScanResult, top_n: usize) -> String {
    let stats = &result.stats;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Memory Composition:\n");
    write_composition(&mut out, stats);

    let _ = writeln!(out, "\nTop {} Largest Folders:", top_n);
    for (i, folder) in stats
        .top_folders(top_n)
        .iter()
        .filter(|f| f.size > 0)
        .enumerate()
    {
        let path = folder.path.to_string_lossy();
        let _ = writeln!(
            out,
            "    {}. {:<width$}  {}",
            i + 1,
            truncate_path(&path, PATH_WIDTH),
            format_size(folder.size),
            width = PATH_WIDTH
        );
    }

    let _ = writeln!(out, "\nTop Extensions (Other):");
    for ext in stats
        .top_other_extensions(top_n)
        .iter()
        .filter(|e| e.size > 0)
    {
        let label = if ext.extension.is_empty() {
            NO_EXTENSION
        } else {
            ext.extension.as_str()
        };
        let _ = writeln!(
            out,
            "    • {:<14} {:>6.2}%  {}",
            label,
            size_percentage(ext.size, stats.totals.total),
            format_size(ext.size)
        );
    }

    let _ = writeln!(
        out,
        "\nTotal Size: {}  ({} files, {} skipped)",
        format_size(stats.totals.total),
        format_count(result.files_processed),
        format_count(result.files_skipped)
    );
    out
}

fn write_composition(out: &mut String, stats: &FileStats) {
    for category in Category::ALL {
        let size = stats.totals.get(category);
        let pct = size_percentage(size, stats.totals.total);
        let _ = writeln!(
            out,
            "{:<11} {}  {:>6.2}%  {}",
            category.label(),
            render_text_bar(pct, BAR_WIDTH),
            pct,
            format_size(size)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssda_core::FolderSize;
    use std::path::PathBuf;

    fn result() -> ScanResult {
        let mut stats = FileStats::new();
        stats.record(".jpg", Category::Photo, 100);
        stats.record(".unknownext", Category::Other, 50);
        stats.record("", Category::Other, 0);
        stats.record(".zip", Category::Compressed, 50);
        stats.folder_sizes = vec![
            FolderSize { path: PathBuf::from("/scan"), size: 100 },
            FolderSize { path: PathBuf::from("/scan/b"), size: 100 },
        ];
        ScanResult {
            stats,
            files_counted: 4,
            files_processed: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_composition() {
        let report = render_report(&result(), 5);
        assert!(report.contains(&format!("Photos      {}   50.00%  100 B", "=".repeat(15) + &"-".repeat(15))));
        assert!(report.contains("Videos"));
        assert!(report.contains("Total Size: 200 B  (4 files, 0 skipped)"));
    }

    #[test]
    fn test_report_lists() {
        let report = render_report(&result(), 5);
        assert!(report.contains("    1. /scan"));
        assert!(report.contains("    2. /scan/b"));
        assert!(report.contains("• .unknownext     25.00%  50 B"));
        // Zero-byte entries are not listed
        assert!(!report.contains(NO_EXTENSION));
    }

    #[test]
    fn test_report_respects_top_n() {
        let report = render_report(&result(), 1);
        assert!(report.contains("Top 1 Largest Folders:"));
        assert!(!report.contains("    2. "));
    }
}
