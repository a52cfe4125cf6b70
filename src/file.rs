// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ConvertOptions;
use crate::error::{ConvertError, Result};

/// `<dest_dir>/<source stem>.<ext>`. Pure; touches no filesystem.
pub fn output_path_for(source: &Path, dest_dir: &Path, ext: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    dest_dir.join(join!(stem, ".", ext))
}

/// Report documents directly inside `dir`, sorted by file name.
pub fn list_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConvertError::NotADirectory { path: dir.to_path_buf() });
    }
    let entries = fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))?;

    let mut out = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ConvertError::io(dir, e))?.path();
        if path.is_file() && ConvertOptions::is_source(&path) {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ConvertError::NotADirectory { path: dir.to_path_buf() });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ConvertError::io(dir, e))?;
    }
    Ok(())
}

/// Create/truncate `path` with `contents`, creating the parent if needed.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| ConvertError::io(path, e))
}
