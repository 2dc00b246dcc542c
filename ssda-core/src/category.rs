use std::fmt;
use std::path::Path;

/// Broad file category used for the composition breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Photo,
    Video,
    Document,
    Compressed,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Photo,
        Category::Video,
        Category::Document,
        Category::Compressed,
        Category::Other,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Photo => "Photos",
            Self::Video => "Videos",
            Self::Document => "Docs",
            Self::Compressed => "Compressed",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a file extension.
///
/// Accepts the extension with or without its leading dot, in any case.
/// Photo, video, document and compressed tables are checked in that order;
/// anything else (including the empty extension) is [`Category::Other`].
pub fn classify(extension: &str) -> Category {
    let lower = extension.to_lowercase();
    let ext = lower.strip_prefix('.').unwrap_or(&lower);

    match ext {
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "heic" => Category::Photo,
        "mp4" | "mov" | "avi" | "mkv" => Category::Video,
        "pdf" | "txt" | "doc" | "docx" | "md" => Category::Document,
        "zip" | "rar" | "7z" | "tar" | "gz" | "bz2" | "xz" | "tar.gz" | "tar.bz2" | "tar.xz"
        | "z" | "lzma" | "lz4" | "zst" | "arj" | "cab" | "deb" | "rpm" | "dmg" | "iso" | "img" => {
            Category::Compressed
        }
        _ => Category::Other,
    }
}

/// Extension of the final path component, starting at its last dot.
///
/// Returns the dot-prefixed suffix (`"notes.tar.gz"` gives `".gz"`,
/// `".bashrc"` gives `".bashrc"`) or an empty string when the name has no dot.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[(&str, Category)] = &[
        (".jpg", Category::Photo),
        (".jpeg", Category::Photo),
        (".png", Category::Photo),
        (".gif", Category::Photo),
        (".bmp", Category::Photo),
        (".heic", Category::Photo),
        (".mp4", Category::Video),
        (".mov", Category::Video),
        (".avi", Category::Video),
        (".mkv", Category::Video),
        (".pdf", Category::Document),
        (".txt", Category::Document),
        (".doc", Category::Document),
        (".docx", Category::Document),
        (".md", Category::Document),
        (".zip", Category::Compressed),
        (".7z", Category::Compressed),
        (".tar", Category::Compressed),
        (".gz", Category::Compressed),
        (".zst", Category::Compressed),
        (".iso", Category::Compressed),
        (".img", Category::Compressed),
    ];

    #[test]
    fn test_classify_known_tables() {
        for (ext, expected) in KNOWN {
            assert_eq!(classify(ext), *expected, "{ext}");
        }
    }

    #[test]
    fn test_classify_case_insensitive() {
        for (ext, _) in KNOWN {
            assert_eq!(classify(ext), classify(&ext.to_uppercase()), "{ext}");
        }
        assert_eq!(classify(".JpG"), Category::Photo);
    }

    #[test]
    fn test_classify_without_dot() {
        assert_eq!(classify("mkv"), Category::Video);
        assert_eq!(classify("PDF"), Category::Document);
    }

    #[test]
    fn test_classify_unknown_is_other() {
        assert_eq!(classify(""), Category::Other);
        assert_eq!(classify("."), Category::Other);
        assert_eq!(classify(".unknownext"), Category::Other);
        assert_eq!(classify(".rs"), Category::Other);
        assert_eq!(classify("\u{0}\u{fffd} garbage"), Category::Other);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a/b/photo.JPG")), ".JPG");
        assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("README")), "");
        assert_eq!(extension_of(Path::new(".bashrc")), ".bashrc");
        assert_eq!(extension_of(Path::new("trailing.")), ".");
        assert_eq!(extension_of(Path::new("/")), "");
    }
}
