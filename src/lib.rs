//! Client-side workflow for the Smart-Hire resume ranking service:
//! collect resumes and job requirements, submit them as one multipart
//! request, and render the ranked candidate list the service returns.

pub mod assembler;
pub mod cli;
pub mod client;
pub mod collector;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod types;

pub use client::{RankingClient, RankingService};
pub use collector::{DiskFileSource, FileSource, InputCollector};
pub use config::ServiceConfig;
pub use controller::{SubmitController, WorkflowState};
pub use error::{RankingRequestError, SubmitError, ValidationError};
pub use render::{render_table, ScoreTier};
pub use types::{JobRequirement, RankedCandidate, ResumeFile, SubmissionRequest};
