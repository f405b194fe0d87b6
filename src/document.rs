//! Documents handed to the scorers.

use serde::Serialize;

/// A named piece of plain text (a resume or a job description).
///
/// Text is already extracted from its source format; an extraction failure is
/// represented by empty text, never by a missing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Candidate identifier, typically the source file name.
    pub name: String,
    /// Raw text content.
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Returns `true` if the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("alice.txt", "Rust engineer");
        assert_eq!(doc.name, "alice.txt");
        assert_eq!(doc.text, "Rust engineer");
        assert!(!doc.is_blank());
    }

    #[test]
    fn test_document_blank() {
        assert!(Document::new("empty.pdf", "").is_blank());
        assert!(Document::new("spaces.txt", " \n\t ").is_blank());
    }
}
