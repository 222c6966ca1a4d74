//! Atomic I/O operations with file locking, plus whole-tree helpers

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    // Ensure parent directory exists
    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let result = write_locked(&temp_path, content, &native_path)
        .and_then(|()| fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Write `content` to `temp_path` under an exclusive lock and sync it.
fn write_locked(temp_path: &Path, content: &[u8], target: &Path) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}

/// Read text content, returning `None` when the file does not exist.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Create a directory and all missing parents.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Recursively copy `src` into `dst`, dereferencing symbolic links.
///
/// `dst` is created if missing. Links are followed, so the copy holds the
/// link targets' contents rather than the links themselves. Entries that are
/// neither directories nor regular files are skipped.
pub fn copy_tree(src: &NormalizedPath, dst: &NormalizedPath) -> Result<()> {
    let src_root = src.to_native();
    let dst_root = dst.to_native();

    for entry in WalkDir::new(&src_root).follow_links(true) {
        let entry = entry.map_err(|e| Error::Walk {
            path: src_root.clone(),
            message: e.to_string(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(&src_root)
            .map_err(|e| Error::Walk {
                path: entry.path().to_path_buf(),
                message: e.to_string(),
            })?;
        let target = dst_root.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target).map_err(|e| Error::io(entry.path(), e))?;
        } else {
            tracing::debug!(path = %entry.path().display(), "Skipping special file");
        }
    }

    Ok(())
}

/// Recursively remove a directory tree. A missing directory is not an error.
pub fn remove_tree(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    match fs::remove_dir_all(&native_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Mark a file executable by owner, group and other (`0o755`).
#[cfg(unix)]
pub fn set_executable(path: &NormalizedPath) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let native_path = path.to_native();
    fs::set_permissions(&native_path, fs::Permissions::from_mode(0o755))
        .map_err(|e| Error::io(&native_path, e))
}

/// Executability is not a permission bit on this platform.
#[cfg(not(unix))]
pub fn set_executable(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::metadata(&native_path)
        .map(|_| ())
        .map_err(|e| Error::io(&native_path, e))
}
