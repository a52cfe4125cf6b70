// src/source.rs
// Turn one report document into its ordered text lines.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

pub trait LineSource {
    fn path(&self) -> &Path;

    /// Whole document text in reading order.
    fn read_text(&self) -> Result<String>;

    /// Lines as extracted, untrimmed. A document with no visible text is an error.
    fn read_lines(&self) -> Result<Vec<String>> {
        let lines = split_lines(&self.read_text()?);
        if lines.iter().all(|l| l.trim().is_empty()) {
            return Err(ConvertError::EmptyDocument { path: self.path().to_path_buf() });
        }
        Ok(lines)
    }
}

/// Split on '\n' only; '\r' and other padding stay for the scanners to trim.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(String::from).collect()
}

/// Text already extracted from a report, one line per line.
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl LineSource for TextFile {
    fn path(&self) -> &Path { &self.path }

    fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| ConvertError::Source {
            path: self.path.clone(),
            source: Box::new(e),
        })
    }
}

#[cfg(feature = "pdf")]
pub struct PdfFile {
    path: PathBuf,
}

#[cfg(feature = "pdf")]
impl PdfFile {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

#[cfg(feature = "pdf")]
impl LineSource for PdfFile {
    fn path(&self) -> &Path { &self.path }

    fn read_text(&self) -> Result<String> {
        let source_err = |msg: String| ConvertError::Source {
            path: self.path.clone(),
            source: msg.into(),
        };
        // The extractor panics on some malformed files; keep that inside this document.
        match std::panic::catch_unwind(|| pdf_extract::extract_text(&self.path)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(source_err(format!("pdf parse failed: {e}"))),
            Err(_) => Err(source_err(s!("pdf parser panicked"))),
        }
    }
}

/// Pick a source by file extension.
pub fn open(path: &Path) -> Result<Box<dyn LineSource>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "txt" => Ok(Box::new(TextFile::new(path))),
        #[cfg(feature = "pdf")]
        "pdf" => Ok(Box::new(PdfFile::new(path))),
        _ => Err(ConvertError::Unsupported { path: path.to_path_buf() }),
    }
}
