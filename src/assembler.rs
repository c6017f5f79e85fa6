// src/assembler.rs
//! Submission assembly: the pure gate in front of the network call and
//! the snapshot construction. No I/O happens here.

use crate::error::ValidationError;
use crate::types::{JobRequirement, ResumeFile, SubmissionRequest};

/// Check the submission invariant: at least one resume and a description
/// that is non-empty after trimming.
pub fn validate(files: &[ResumeFile], description: &str) -> Result<(), ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::NoResumes);
    }
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}

/// True iff a submission may be constructed. Gates the trigger control.
pub fn can_submit(files: &[ResumeFile], description: &str) -> bool {
    validate(files, description).is_ok()
}

/// Build the immutable snapshot sent as one request. Fields map 1:1;
/// skills stays an empty string when unset.
pub fn build_request(
    files: Vec<ResumeFile>,
    description: String,
    skills: String,
) -> SubmissionRequest {
    SubmissionRequest {
        job: JobRequirement {
            description,
            skills,
        },
        resumes: files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(name: &str) -> ResumeFile {
        ResumeFile::new(name, "application/pdf", vec![0u8; 4])
    }

    #[test]
    fn test_can_submit_boundary_cases() {
        let files = vec![resume("a.pdf")];

        assert!(!can_submit(&[], ""));
        assert!(!can_submit(&files, ""));
        assert!(!can_submit(&[], "Senior backend engineer"));
        assert!(can_submit(&files, "Senior backend engineer"));
    }

    #[test]
    fn test_whitespace_only_description_rejected() {
        let files = vec![resume("a.pdf")];
        assert!(!can_submit(&files, "   \n\t  "));
        assert_eq!(
            validate(&files, "   "),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_validate_reports_missing_files_first() {
        assert_eq!(validate(&[], ""), Err(ValidationError::NoResumes));
    }

    #[test]
    fn test_build_request_maps_fields() {
        let request = build_request(
            vec![resume("a.pdf"), resume("b.pdf")],
            "Senior backend engineer".to_string(),
            "Go, SQL".to_string(),
        );

        assert_eq!(request.job.description, "Senior backend engineer");
        assert_eq!(request.job.skills, "Go, SQL");
        assert_eq!(request.resumes.len(), 2);
        assert_eq!(request.resumes[0].file_name, "a.pdf");
    }

    #[test]
    fn test_build_request_empty_skills() {
        let request = build_request(
            vec![resume("a.pdf")],
            "Senior backend engineer".to_string(),
            String::new(),
        );
        assert_eq!(request.job.skills, "");
    }
}
