//! Atomic output writes.
//!
//! Output goes to a hidden sibling file first and is renamed over the
//! target, so an interrupted run never leaves a half-written list behind.

use std::io::{self, Write};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::OutputError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `path` inside `dir` with `contents`.
///
/// `path` must be a single normal file name relative to `dir`.
///
/// # Errors
///
/// Returns [`OutputError::InvalidPath`] for anything other than a bare file
/// name, and [`OutputError::Write`] if the file cannot be written.
pub(crate) fn write_atomic(
    dir: &Dir,
    path: &Utf8Path,
    contents: &str,
) -> Result<(), OutputError> {
    let file_name = bare_file_name(path).ok_or_else(|| OutputError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let staging = format!(
        ".{file_name}.{}.{}.partial",
        process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );

    let outcome = write_synced(dir, &staging, contents)
        .and_then(|()| dir.rename(&staging, dir, file_name));
    if let Err(err) = outcome {
        drop(dir.remove_file(&staging));
        return Err(OutputError::Write {
            path: path.to_path_buf(),
            message: err.to_string(),
        });
    }

    // Best effort; some platforms refuse to fsync directories.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn bare_file_name(path: &Utf8Path) -> Option<&str> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Some(name),
        _ => None,
    }
}

fn write_synced(dir: &Dir, name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
