/// Format bytes into human-readable string
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];
    const KB: u64 = 1024;

    if bytes < KB {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / KB as f64;
    let mut unit = 0;
    while value >= KB as f64 && unit < UNITS.len() - 1 {
        value /= KB as f64;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Calculate percentage of size relative to total
pub fn size_percentage(size: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (size as f64 / total as f64) * 100.0
    }
}

/// Format a number with thousand separators (e.g., 1,234,567)
pub fn format_count(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }

    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Keep the tail of `path` so it fits in `max_chars`, prefixed with "..."
pub fn truncate_path(path: &str, max_chars: usize) -> String {
    let len = path.chars().count();
    if len <= max_chars {
        return path.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let tail: String = path.chars().skip(len - (max_chars - 3)).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(format_size(1024 * 1024 * 1024 * 1024), "1.0 TB");
        assert_eq!(format_size(u64::MAX), "16.0 EB");
    }

    #[test]
    fn test_size_percentage() {
        assert_eq!(size_percentage(50, 100), 50.0);
        assert_eq!(size_percentage(0, 100), 0.0);
        assert_eq!(size_percentage(100, 0), 0.0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_truncate_path() {
        assert_eq!(truncate_path("/a/b", 10), "/a/b");
        assert_eq!(truncate_path("/home/user/photos", 10), ".../photos");
        assert_eq!(truncate_path("/tmp/ünïcödé", 8), "...ïcödé");
        assert_eq!(truncate_path("/abcdef", 2), "..");
    }
}
