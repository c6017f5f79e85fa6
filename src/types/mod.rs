// src/types/mod.rs

pub mod response;
pub mod submission;

pub use response::{RankedCandidate, RankingResponse};
pub use submission::{JobRequirement, ResumeFile, SubmissionRequest};
