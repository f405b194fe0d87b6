//! Turning files on disk into [`Document`]s.
//!
//! Candidate extraction never fails: an unreadable or unparseable file becomes
//! a document with empty text and a warning, so scorers only ever see
//! degenerate documents, not missing ones. The reference document is the
//! exception, since a run without it is meaningless.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::IngestError;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::document::Document;

/// Candidate file formats, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    PlainText,
}

impl SourceKind {
    pub const LOAD_ORDER: [SourceKind; 2] = [SourceKind::Pdf, SourceKind::PlainText];

    /// Classifies a path by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(SourceKind::Pdf),
            "txt" => Some(SourceKind::PlainText),
            _ => None,
        }
    }
}

/// Reads the reference document.
///
/// `.pdf` references go through the same extractor as candidates; anything
/// else is read as UTF-8 text. An unreadable file is an error.
pub fn read_reference(path: &Path) -> Result<String, IngestError> {
    let read_failed = |source| IngestError::ReadFailed {
        path: path.to_path_buf(),
        source,
    };

    match SourceKind::from_path(path) {
        Some(SourceKind::Pdf) => {
            let bytes = std::fs::read(path).map_err(read_failed)?;
            Ok(pdf_text(path, &bytes))
        }
        _ => std::fs::read_to_string(path).map_err(read_failed),
    }
}

/// Loads every `.pdf` then every `.txt` file directly inside `dir`.
///
/// Each group is sorted by file name; that order is the tie-break order of the
/// ranking. A missing directory yields an empty set.
pub fn load_candidates(dir: &Path) -> Result<Vec<Document>, IngestError> {
    if !dir.is_dir() {
        warn!(path = %dir.display(), "Candidate directory does not exist");
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::ListFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<(SourceKind, String, std::path::PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::ListFailed {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(kind) = SourceKind::from_path(&path) else {
            debug!(path = %path.display(), "Skipping unsupported file");
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        files.push((kind, name, path));
    }

    let mut documents = Vec::with_capacity(files.len());
    for kind in SourceKind::LOAD_ORDER {
        let mut group: Vec<_> = files.iter().filter(|(k, _, _)| *k == kind).collect();
        group.sort_by(|a, b| a.1.cmp(&b.1));

        for (kind, name, path) in group {
            let text = extract_text(*kind, path);
            documents.push(Document::new(name.clone(), text));
        }
    }

    info!(
        path = %dir.display(),
        num_candidates = documents.len(),
        "Loaded candidates"
    );

    Ok(documents)
}

/// Extracts plain text from a candidate file; empty on any failure.
pub fn extract_text(kind: SourceKind, path: &Path) -> String {
    match kind {
        SourceKind::PlainText => read_lossy(path),
        SourceKind::Pdf => extract_pdf(path),
    }
}

/// Reads a file as UTF-8, dropping invalid byte sequences.
fn read_lossy(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes)
            .chars()
            .filter(|c| *c != char::REPLACEMENT_CHARACTER)
            .collect(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Unreadable candidate, using empty text");
            String::new()
        }
    }
}

fn extract_pdf(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => pdf_text(path, &bytes),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Unreadable PDF, using empty text");
            String::new()
        }
    }
}

#[cfg(feature = "pdf")]
fn pdf_text(path: &Path, bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "PDF text extraction failed, using empty text");
            String::new()
        }
    }
}

#[cfg(not(feature = "pdf"))]
fn pdf_text(path: &Path, _bytes: &[u8]) -> String {
    warn!(
        path = %path.display(),
        "PDF extraction not compiled in (enable the `pdf` feature), using empty text"
    );
    String::new()
}
