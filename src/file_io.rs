//! The File sink external collaborator: `load`/`save_atomic`.
//!
//! Saves go through a `<path>.tmp` file, `fsync`, then `rename` so a reader
//! never observes a half-written file. Any failure removes the temp file
//! and leaves the original untouched.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{codes, EditorError, ErrorKind, Result};

/// Outcome of [`load`] — distinguishes "file exists" from "start empty".
pub enum Loaded {
    /// The path existed; here are its raw bytes.
    Existing(Vec<u8>),
    /// The path didn't exist — caller should start a new, empty buffer.
    New,
}

/// Read `path`. A missing file is not an error — it means "new file".
/// Any other I/O failure (permissions, a directory, etc.) is fatal to the
/// caller's startup sequence.
pub fn load(path: &Path) -> Result<Loaded> {
    match fs::read(path) {
        Ok(bytes) => Ok(Loaded::Existing(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Loaded::New),
        Err(e) => Err(EditorError::critical(
            ErrorKind::Io,
            codes::READ_FAILED,
            format!("read {}: {}", path.display(), e),
        )),
    }
}

/// Write `bytes` to `path` atomically: write to `path.tmp`, `fsync`,
/// `rename` over `path`. On any failure the temp file is removed and the
/// original is left untouched — the caller's dirty flag must stay set.
pub fn save_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);

    let write_result = (|| -> std::io::Result<()> {
        let mut f: File = OpenOptions::new().write(true).create(true).truncate(true).open(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
        Ok(())
    })();

    if let Err(e) = write_result {
        let _ = fs::remove_file(&tmp);
        return Err(EditorError::new(
            ErrorKind::Io,
            codes::WRITE_FAILED,
            format!("write failed: {e}"),
        ));
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(EditorError::new(
            ErrorKind::Io,
            codes::RENAME_FAILED,
            format!("rename failed: {e}"),
        ));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> std::path::PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".tmp");
    std::path::PathBuf::from(s)
}
