// src/collector.rs
//! Input collection: the current resume selection, the free-text job
//! requirement fields, and the drop-target highlight flag.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::types::ResumeFile;

/// Where resume files come from. The file-picker dialog and the
/// drag-and-drop surface are ambient capabilities of the host
/// environment; hiding them behind this trait keeps the collector
/// testable without one.
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn acquire_files(&self) -> Result<Vec<ResumeFile>>;
}

/// Reads resumes from local paths. No file-type or size validation is
/// performed here; unrecognized extensions are declared as octet-stream
/// and sent anyway, the service rejects what it cannot parse.
pub struct DiskFileSource {
    paths: Vec<PathBuf>,
}

impl DiskFileSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl FileSource for DiskFileSource {
    async fn acquire_files(&self) -> Result<Vec<ResumeFile>> {
        let mut files = Vec::with_capacity(self.paths.len());

        for path in &self.paths {
            let content = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read file: {}", path.display()))?;

            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string())
                .with_context(|| format!("Invalid file name: {}", path.display()))?;

            let media_type = media_type_for(&file_name).to_string();
            files.push(ResumeFile::new(file_name, media_type, content));
        }

        Ok(files)
    }
}

/// Guess the declared media type from the filename extension.
pub fn media_type_for(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        "application/pdf"
    } else if lower_name.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower_name.ends_with(".doc") {
        "application/msword"
    } else if lower_name.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

/// In-memory input state behind the submission form. Every selection
/// event replaces the whole file list; the browse and drop paths converge
/// on the same replace semantics.
#[derive(Debug, Default)]
pub struct InputCollector {
    files: Vec<ResumeFile>,
    description: String,
    skills: String,
    drop_highlight: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire current selection. Never merges with the prior
    /// selection.
    pub fn set_files(&mut self, files: Vec<ResumeFile>) {
        self.files = files;
    }

    /// Direct overwrite on every change event; no debouncing.
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    pub fn set_skills(&mut self, text: impl Into<String>) {
        self.skills = text.into();
    }

    /// A file is being dragged over the drop target.
    pub fn drag_enter(&mut self) {
        self.drop_highlight = true;
    }

    pub fn drag_leave(&mut self) {
        self.drop_highlight = false;
    }

    /// Complete a drop: same replace semantics as `set_files`, and the
    /// highlight reverts.
    pub fn drop_files(&mut self, files: Vec<ResumeFile>) {
        self.files = files;
        self.drop_highlight = false;
    }

    pub fn files(&self) -> &[ResumeFile] {
        &self.files
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn skills(&self) -> &str {
        &self.skills
    }

    pub fn drop_highlight(&self) -> bool {
        self.drop_highlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(name: &str) -> ResumeFile {
        ResumeFile::new(name, media_type_for(name), vec![1, 2, 3])
    }

    #[test]
    fn test_selection_replaces_prior_files() {
        let mut collector = InputCollector::new();

        collector.set_files(vec![resume("a.pdf"), resume("b.pdf")]);
        collector.set_files(vec![resume("c.docx")]);

        let names: Vec<&str> = collector.files().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["c.docx"]);
    }

    #[test]
    fn test_drop_replaces_files_and_clears_highlight() {
        let mut collector = InputCollector::new();
        collector.set_files(vec![resume("a.pdf")]);

        collector.drag_enter();
        assert!(collector.drop_highlight());

        collector.drop_files(vec![resume("b.pdf"), resume("c.pdf")]);
        assert!(!collector.drop_highlight());
        assert_eq!(collector.files().len(), 2);
        assert_eq!(collector.files()[0].file_name, "b.pdf");
    }

    #[test]
    fn test_drag_leave_reverts_highlight() {
        let mut collector = InputCollector::new();
        collector.drag_enter();
        collector.drag_leave();
        assert!(!collector.drop_highlight());
    }

    #[test]
    fn test_text_fields_overwrite() {
        let mut collector = InputCollector::new();
        collector.set_description("Senior backend engineer");
        collector.set_description("Senior backend engineer with Go");
        collector.set_skills("Go");
        collector.set_skills("Go, SQL");

        assert_eq!(collector.description(), "Senior backend engineer with Go");
        assert_eq!(collector.skills(), "Go, SQL");
    }

    #[test]
    fn test_media_type_for() {
        assert_eq!(media_type_for("cv.pdf"), "application/pdf");
        assert_eq!(media_type_for("CV.PDF"), "application/pdf");
        assert_eq!(media_type_for("cv.doc"), "application/msword");
        assert_eq!(
            media_type_for("cv.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(media_type_for("cv.txt"), "text/plain");
        assert_eq!(media_type_for("cv.png"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_disk_source_reads_files_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = dir.path().join("resume1.pdf");
        let second = dir.path().join("resume2.txt");
        std::fs::write(&first, b"pdf bytes").expect("write");
        std::fs::write(&second, b"plain text").expect("write");

        let source = DiskFileSource::new(vec![first, second]);
        let files = source.acquire_files().await.expect("acquire");

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name, "resume1.pdf");
        assert_eq!(files[0].media_type, "application/pdf");
        assert_eq!(files[0].content, b"pdf bytes");
        assert_eq!(files[1].file_name, "resume2.txt");
        assert_eq!(files[1].media_type, "text/plain");
    }

    #[tokio::test]
    async fn test_disk_source_missing_file_errors() {
        let source = DiskFileSource::new(vec![PathBuf::from("/nonexistent/resume.pdf")]);
        assert!(source.acquire_files().await.is_err());
    }
}
