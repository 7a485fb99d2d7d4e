//! Atomic file operations
//!
//! Writes never touch the destination directly:
//!
//! 1. Write to `<path>.tmp`
//! 2. Call sync_all() to flush to disk
//! 3. Rename the temp file over the final path (atomic on most filesystems)
//!
//! After a crash the destination holds either the old or the new content,
//! never a partial write.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Temp file used while writing `path`: the full file name with `.tmp` appended
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Atomically write content produced by `write_fn` to `path`
///
/// The temp file is removed if writing or renaming fails.
///
/// # Example
///
/// ```ignore
/// atomic_write_with("inventory.json", |out| {
///     writeln!(out, "{{}}")?;
///     Ok(())
/// })?;
/// ```
pub fn atomic_write_with<P, F>(path: P, write_fn: F) -> io::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let result = write_and_rename(path, &temp_path, write_fn);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_rename<F>(path: &Path, temp_path: &Path, write_fn: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut writer = BufWriter::new(File::create(temp_path)?);
    write_fn(&mut writer)?;
    writer.flush()?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    drop(file);

    fs::rename(temp_path, path)
}
