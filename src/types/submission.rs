// src/types/submission.rs

/// One selected resume: opaque content plus the filename and media type
/// declared at selection time. Identity is its position in the selection
/// list; the list carries no deduplication.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub media_type: String,
    pub content: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            content,
        }
    }
}

/// Free-text job requirements. Description must be non-empty (after
/// trimming) at submit time; skills is an optional comma-delimited string.
#[derive(Debug, Clone, Default)]
pub struct JobRequirement {
    pub description: String,
    pub skills: String,
}

/// Immutable snapshot of everything sent in one ranking request. Built
/// fresh on each submit, never reused across requests.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub job: JobRequirement,
    pub resumes: Vec<ResumeFile>,
}
