use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::category::Category;

/// Byte totals per category plus their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub photos: u64,
    pub videos: u64,
    pub docs: u64,
    pub compressed: u64,
    pub others: u64,
    /// Always equal to the sum of the five category counters.
    pub total: u64,
}

impl CategoryTotals {
    /// Add `size` bytes to `category` and to the total.
    pub fn add(&mut self, category: Category, size: u64) {
        let slot = match category {
            Category::Photo => &mut self.photos,
            Category::Video => &mut self.videos,
            Category::Document => &mut self.docs,
            Category::Compressed => &mut self.compressed,
            Category::Other => &mut self.others,
        };
        *slot += size;
        self.total += size;
    }

    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Photo => self.photos,
            Category::Video => self.videos,
            Category::Document => self.docs,
            Category::Compressed => self.compressed,
            Category::Other => self.others,
        }
    }

    pub fn sum_of_categories(&self) -> u64 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }

    fn merge(&mut self, other: &CategoryTotals) {
        self.photos += other.photos;
        self.videos += other.videos;
        self.docs += other.docs;
        self.compressed += other.compressed;
        self.others += other.others;
        self.total += other.total;
    }
}

/// Bytes attributed to one extension of the Other category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSize {
    /// Dot-prefixed extension, empty for extensionless files
    pub extension: String,
    pub size: u64,
}

/// Bytes of the files directly inside one folder (not recursive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSize {
    pub path: PathBuf,
    pub size: u64,
}

/// Scan aggregate.
///
/// Used both as a worker-local accumulator and as the merged result.
/// Worker-local instances never carry folder sizes; those are collected in
/// a shared map and attached once at the end of the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStats {
    pub totals: CategoryTotals,
    /// Bytes per extension, only for files classified as [`Category::Other`]
    pub other_extensions: BTreeMap<String, u64>,
    /// One entry per folder that directly contains at least one scanned file
    pub folder_sizes: Vec<FolderSize>,
}

impl FileStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account one file of `size` bytes with the given extension.
    pub fn record(&mut self, extension: &str, category: Category, size: u64) {
        self.totals.add(category, size);
        if category == Category::Other {
            match self.other_extensions.get_mut(extension) {
                Some(total) => *total += size,
                None => {
                    self.other_extensions.insert(extension.to_string(), size);
                }
            }
        }
    }

    /// Fold another aggregate into this one.
    ///
    /// Field-wise sum; folder entries with the same path are combined and the
    /// list is kept ordered by path, so merge order never shows in the result.
    pub fn merge(&mut self, other: &FileStats) {
        self.totals.merge(&other.totals);
        for (ext, size) in &other.other_extensions {
            *self.other_extensions.entry(ext.clone()).or_insert(0) += size;
        }
        if !other.folder_sizes.is_empty() {
            let mut folders: BTreeMap<PathBuf, u64> = BTreeMap::new();
            for folder in self.folder_sizes.drain(..).chain(other.folder_sizes.iter().cloned()) {
                *folders.entry(folder.path).or_insert(0) += folder.size;
            }
            self.folder_sizes = folders
                .into_iter()
                .map(|(path, size)| FolderSize { path, size })
                .collect();
        }
    }

    /// The `n` largest Other extensions, largest first.
    ///
    /// Equal sizes keep extension order, so the output is deterministic.
    pub fn top_other_extensions(&self, n: usize) -> Vec<ExtensionSize> {
        let mut exts: Vec<ExtensionSize> = self
            .other_extensions
            .iter()
            .map(|(extension, &size)| ExtensionSize {
                extension: extension.clone(),
                size,
            })
            .collect();
        exts.sort_by(|a, b| b.size.cmp(&a.size));
        exts.truncate(n);
        exts
    }

    /// The `n` largest folders, largest first. Returns an owned copy.
    pub fn top_folders(&self, n: usize) -> Vec<FolderSize> {
        let mut folders = self.folder_sizes.clone();
        folders.sort_by(|a, b| b.size.cmp(&a.size));
        folders.truncate(n);
        folders
    }

    pub fn other_extensions_total(&self) -> u64 {
        self.other_extensions.values().sum()
    }

    pub fn folder_sizes_total(&self) -> u64 {
        self.folder_sizes.iter().map(|f| f.size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.total == 0 && self.other_extensions.is_empty() && self.folder_sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileStats {
        let mut stats = FileStats::new();
        stats.record(".jpg", Category::Photo, 100);
        stats.record(".log", Category::Other, 40);
        stats.record(".bin", Category::Other, 70);
        stats.record("", Category::Other, 40);
        stats.record(".iso", Category::Compressed, 25);
        stats.folder_sizes = vec![
            FolderSize { path: PathBuf::from("/a"), size: 10 },
            FolderSize { path: PathBuf::from("/b"), size: 200 },
            FolderSize { path: PathBuf::from("/c"), size: 65 },
        ];
        stats
    }

    #[test]
    fn test_record_keeps_invariants() {
        let stats = sample();
        assert_eq!(stats.totals.total, 275);
        assert_eq!(stats.totals.sum_of_categories(), stats.totals.total);
        assert_eq!(stats.other_extensions_total(), stats.totals.others);
        assert_eq!(stats.other_extensions.get(""), Some(&40));
        assert!(!stats.other_extensions.contains_key(".jpg"));
    }

    #[test]
    fn test_top_other_extensions_order_and_len() {
        let stats = sample();
        let top = stats.top_other_extensions(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].extension, ".bin");
        assert_eq!(top[0].size, 70);
        // Tie between "" and ".log" is broken by extension order
        assert_eq!(top[1].extension, "");

        let all = stats.top_other_extensions(10);
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].size >= w[1].size));
    }

    #[test]
    fn test_top_other_extensions_empty() {
        let stats = FileStats::new();
        assert!(stats.top_other_extensions(5).is_empty());
        assert!(sample().top_other_extensions(0).is_empty());
    }

    #[test]
    fn test_top_queries_are_idempotent() {
        let stats = sample();
        assert_eq!(stats.top_other_extensions(3), stats.top_other_extensions(3));
        assert_eq!(stats.top_folders(3), stats.top_folders(3));
    }

    #[test]
    fn test_top_folders_copy_isolation() {
        let stats = sample();
        let mut top = stats.top_folders(2);
        assert_eq!(top[0].path, PathBuf::from("/b"));
        assert_eq!(top[1].path, PathBuf::from("/c"));

        top[0].size = 0;
        top.clear();

        let again = stats.top_folders(2);
        assert_eq!(again[0].size, 200);
        assert_eq!(stats.folder_sizes[0].path, PathBuf::from("/a"));
    }

    #[test]
    fn test_merge_sums_fields() {
        let mut a = FileStats::new();
        a.record(".mp4", Category::Video, 10);
        a.record(".dat", Category::Other, 5);

        let mut b = FileStats::new();
        b.record(".dat", Category::Other, 7);
        b.record(".pdf", Category::Document, 3);

        let mut merged = FileStats::new();
        merged.merge(&a);
        merged.merge(&b);

        assert_eq!(merged.totals.videos, 10);
        assert_eq!(merged.totals.docs, 3);
        assert_eq!(merged.totals.others, 12);
        assert_eq!(merged.totals.total, 25);
        assert_eq!(merged.other_extensions.get(".dat"), Some(&12));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut a = sample();
        a.folder_sizes.truncate(1);
        let mut b = FileStats::new();
        b.record(".mkv", Category::Video, 9);
        b.folder_sizes = vec![FolderSize { path: PathBuf::from("/a"), size: 9 }];

        let mut ab = FileStats::new();
        ab.merge(&a);
        ab.merge(&b);
        let mut ba = FileStats::new();
        ba.merge(&b);
        ba.merge(&a);

        assert_eq!(ab, ba);
        assert_eq!(ab.folder_sizes, vec![FolderSize { path: PathBuf::from("/a"), size: 19 }]);
    }
}
