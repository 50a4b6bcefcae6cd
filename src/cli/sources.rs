//! Source file discovery and reading
//!
//! Resource declaration files use the `.res` extension. Directories are searched recursively,
//! skipping hidden directories and build output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extension of resource declaration files.
pub const RES_EXTENSION: &str = "res";

/// Maximum source file size (16 MB)
///
/// Files larger than this are rejected before reading.
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Errors that occur while locating or reading source files
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot access '{path}': {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source file '{path}' is too large ({size} bytes, max {max} bytes)")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("error reading '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .res files found under '{0}'")]
    NoFiles(PathBuf),
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error, invalid UTF-8)
/// - The file exceeds [`MAX_SOURCE_SIZE`]
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let metadata = fs::metadata(path).map_err(|source| SourceError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect `.res` files under `path` (or `path` itself when it is a file), sorted.
///
/// An explicitly named file is accepted whatever its extension.
pub fn collect_res_files(path: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();
    if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        walk(path, &mut files);
        files.sort();
    }

    if files.is_empty() {
        return Err(SourceError::NoFiles(path.to_path_buf()));
    }
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "cannot read directory");
        return;
    };
    for entry in entries.flatten() {
        let entry_path = entry.path();
        if entry_path.is_dir() {
            let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if !name.starts_with('.') && name != "target" && name != "out" {
                walk(&entry_path, files);
            }
        } else if entry_path.extension().is_some_and(|ext| ext == RES_EXTENSION) {
            files.push(entry_path);
        }
    }
}
