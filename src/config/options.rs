// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory scanned for report documents
    pub source_dir: PathBuf,
    /// Directory receiving one `.xml` per converted document
    pub dest_dir: PathBuf,
    /// Upper bound on concurrent conversions
    pub workers: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            dest_dir: PathBuf::from(DEFAULT_OUT_DIR),
            workers: WORKERS,
        }
    }
}

impl ConvertOptions {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Whether `path` carries one of the recognized source extensions.
    pub fn is_source(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| SOURCE_EXTENSIONS.iter().any(|known| e.eq_ignore_ascii_case(known)))
            .unwrap_or(false)
    }
}
