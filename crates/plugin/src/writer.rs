//! Atomic artifact writes

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::GenerationError;

/// Write `contents` to `path` so that readers only ever see the old file or the
/// complete new one.
///
/// Content goes to a temporary file in the destination directory which is then renamed
/// over `path`. On failure the temporary file is removed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), GenerationError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if path.is_dir() {
        return Err(GenerationError::UnwritableDestination {
            path: path.to_path_buf(),
        });
    }

    fs::create_dir_all(parent).map_err(|source| GenerationError::Io {
        path: parent.to_path_buf(),
        source,
    })?;

    write_via_temp(parent, path, contents)
}

/// Write into a temporary file in `parent`, then rename it onto `path`
fn write_via_temp(parent: &Path, path: &Path, contents: &[u8]) -> Result<(), GenerationError> {
    let io_error = |source: std::io::Error| GenerationError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(io_error)?;
    temp.write_all(contents).map_err(io_error)?;
    temp.as_file().sync_all().map_err(io_error)?;

    temp.persist(path).map_err(|err| GenerationError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    Ok(())
}
