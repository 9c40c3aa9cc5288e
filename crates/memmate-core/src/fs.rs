//! Filesystem utilities for atomic operations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Atomically replace the contents of `destination`.
///
/// The contents are first written to a uniquely-named temp file next to the
/// destination, then renamed into place. On some platforms (notably Windows),
/// `fs::rename` fails if the destination already exists; that case is handled
/// by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written, or if the rename
/// fails even after the fallback attempt.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination);
    fs::write(&temp_path, contents).map_err(|err| {
        let _ = fs::remove_file(&temp_path);
        err
    })?;

    if let Err(initial_err) = fs::rename(&temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(&temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(&temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Temp file path in the same directory as `path`, so the final rename never
/// crosses a filesystem boundary.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "store".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
