//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use screen::document::Document;

pub const JOB_DESCRIPTION: &str = "Seeking a backend engineer with distributed systems experience.";

pub const STRONG_RESUME: &str = "Backend engineer, 5 years distributed systems and databases.";

pub const WEAK_RESUME: &str = "Graphic designer skilled in Photoshop.";

pub fn scenario() -> Vec<Document> {
    vec![
        Document::new("A.txt", STRONG_RESUME),
        Document::new("B.txt", WEAK_RESUME),
    ]
}

/// Lays out `job_description.txt` and a `resumes/` directory under `root`.
pub fn write_workspace(root: &Path, resumes: &[(&str, &str)]) {
    fs::write(root.join("job_description.txt"), JOB_DESCRIPTION).expect("write jd");
    let dir = root.join("resumes");
    fs::create_dir_all(&dir).expect("create resumes dir");
    for (name, text) in resumes {
        fs::write(dir.join(name), text).expect("write resume");
    }
}
