//! Atomic file writes.
//!
//! Content goes to a uniquely named temporary file next to the target, is
//! synced to disk, then renamed over the target. A reader sees either the
//! old file or a complete new one. Each writer gets its own temporary file,
//! so concurrent runs on the same path all succeed and the last rename wins.

use crate::error::{DailyCodeError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `content` to `path`, creating parent directories as needed.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            DailyCodeError::Io(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        DailyCodeError::Io(format!(
            "failed to create temporary file in '{}': {}",
            parent.display(),
            e
        ))
    })?;

    // The temporary file is removed on drop if any step below fails.
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| {
            DailyCodeError::Io(format!(
                "failed to write temporary file for '{}': {}",
                path.display(),
                e
            ))
        })?;

    temp.persist(path).map_err(|e| {
        DailyCodeError::Io(format!(
            "failed to replace '{}': {}",
            path.display(),
            e.error
        ))
    })?;

    // Persist the directory entry. Best effort; not every platform can open a directory.
    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }
    Ok(())
}
