use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scan was cancelled")]
    Cancelled,

    #[error("A scan worker panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Check that `path` can be used as a scan root.
///
/// This is the only fatal failure of a scan: the root must exist, be a
/// directory and be listable. Everything below the root is best effort.
pub fn validate_root(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| classify_io(path, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }
    std::fs::read_dir(path).map_err(|e| classify_io(path, e))?;
    Ok(())
}

fn classify_io(path: &Path, err: std::io::Error) -> ScanError {
    match err.kind() {
        std::io::ErrorKind::NotFound => ScanError::PathNotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_path_buf()),
        _ => ScanError::Io(err),
    }
}
