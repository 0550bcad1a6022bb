//! Filesystem helpers for writing the store and config files
//!
//! - `atomic_write`: write through a sibling temp file, then rename into place
//! - `atomic_rename`: handles atomic file replacement (Windows requires explicit delete)

use std::fs;
use std::io;
use std::path::Path;

/// Cross-platform atomic rename that handles Windows file replacement.
///
/// On Unix, `fs::rename` atomically replaces the target if it exists.
/// On Windows, `fs::rename` fails if the target exists, so the target is
/// deleted first.
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            fs::remove_file(dst)?;
        }
    }
    fs::rename(src, dst)
}

/// Write `contents` to `path` so readers never observe a half-written file.
///
/// Parent directories are created as needed.
pub fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;
    atomic_rename(&tmp_path, path)
}
