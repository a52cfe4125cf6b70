// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Document-level failures. Parse anomalies inside a document are not errors;
/// they travel as `specs::players::Anomaly` in the conversion report.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read text from {path}")]
    Source {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("No text lines extracted from {path}")]
    EmptyDocument { path: PathBuf },

    #[error("Unsupported source document: {path}")]
    Unsupported { path: PathBuf },

    #[error("Failed to write XML")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path exists but is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
