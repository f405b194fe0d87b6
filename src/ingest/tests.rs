use super::*;
use std::fs;
use std::path::PathBuf;

fn names(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(|d| d.name.as_str()).collect()
}

#[test]
fn test_source_kind_from_path() {
    assert_eq!(
        SourceKind::from_path(Path::new("cv.pdf")),
        Some(SourceKind::Pdf)
    );
    assert_eq!(
        SourceKind::from_path(Path::new("CV.PDF")),
        Some(SourceKind::Pdf)
    );
    assert_eq!(
        SourceKind::from_path(Path::new("notes.txt")),
        Some(SourceKind::PlainText)
    );
    assert_eq!(SourceKind::from_path(Path::new("cv.docx")), None);
    assert_eq!(SourceKind::from_path(Path::new("README")), None);
}

#[test]
fn test_read_reference() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("job.txt");
    fs::write(&path, "Backend engineer").expect("write");
    assert_eq!(read_reference(&path).expect("reads"), "Backend engineer");
}

#[test]
fn test_read_reference_missing_is_error() {
    let err = read_reference(Path::new("/nonexistent/job.txt")).unwrap_err();
    match err {
        IngestError::ReadFailed { path, .. } => {
            assert_eq!(path, PathBuf::from("/nonexistent/job.txt"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_read_reference_pdf_is_not_read_as_utf8() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("job.PDF");
    fs::write(&path, b"%PDF-1.4\n\xff\xfe\x00binary").expect("write");

    let text = read_reference(&path).expect("pdf reference does not fail on encoding");
    assert!(!text.contains('\u{fffd}'));
}

#[cfg(not(feature = "pdf"))]
#[test]
fn test_read_reference_pdf_without_extractor_is_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("job.pdf");
    fs::write(&path, b"%PDF-1.4\n\xff\xfe").expect("write");
    assert_eq!(read_reference(&path).expect("reads"), "");
}

#[test]
fn test_read_reference_missing_pdf_is_error() {
    let err = read_reference(Path::new("/nonexistent/job.pdf")).unwrap_err();
    assert!(matches!(err, IngestError::ReadFailed { .. }));
}

#[test]
fn test_load_candidates_missing_dir_is_empty() {
    let docs = load_candidates(Path::new("/nonexistent/resumes")).expect("loads");
    assert!(docs.is_empty());
}

#[test]
fn test_load_candidates_empty_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(load_candidates(dir.path()).expect("loads").is_empty());
}

#[test]
fn test_load_candidates_order_and_filtering() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("zoe.txt"), "Zoe resume").expect("write");
    fs::write(dir.path().join("adam.txt"), "Adam resume").expect("write");
    fs::write(dir.path().join("bob.pdf"), b"%PDF-1.4 not really").expect("write");
    fs::write(dir.path().join("notes.md"), "ignored").expect("write");
    fs::create_dir(dir.path().join("nested.txt")).expect("mkdir");

    let docs = load_candidates(dir.path()).expect("loads");
    assert_eq!(names(&docs), vec!["bob.pdf", "adam.txt", "zoe.txt"]);
    assert_eq!(docs[1].text, "Adam resume");
    assert_eq!(docs[2].text, "Zoe resume");
}

#[test]
fn test_unparseable_pdf_yields_empty_text() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.pdf");
    fs::write(&path, b"definitely not a pdf").expect("write");
    assert_eq!(extract_text(SourceKind::Pdf, &path), "");
}

#[test]
fn test_invalid_utf8_is_dropped() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9 engineer").expect("write");
    assert_eq!(extract_text(SourceKind::PlainText, &path), "caf engineer");
}

#[test]
fn test_unreadable_text_yields_empty() {
    assert_eq!(
        extract_text(SourceKind::PlainText, Path::new("/nonexistent/a.txt")),
        ""
    );
}
