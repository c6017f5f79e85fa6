// src/error.rs

use thiserror::Error;

/// Local input validation failures. These never reach the network layer;
/// the controller blocks the submission and surfaces a notice instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no resume files selected")]
    NoResumes,

    #[error("job description is empty")]
    EmptyDescription,
}

/// Why a submission could not be started.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A previous submission is still awaiting its response. The trigger
    /// is supposed to be disabled in this state; rejecting here is the
    /// backstop that keeps a second request off the wire.
    #[error("a submission is already in flight")]
    InFlight,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures of one ranking request, with enough context for the caller to
/// present a generic failure notice. The variant split matters only for
/// diagnostic logging; users see a single notice for all three.
#[derive(Debug, Error)]
pub enum RankingRequestError {
    /// The request never produced an HTTP response.
    #[error("failed to reach the ranking service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("ranking service returned status {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// A 2xx response whose body did not carry a well-formed results list.
    #[error("malformed ranking response: {0}")]
    Contract(String),
}
