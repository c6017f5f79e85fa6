// src/controller.rs
//! Workflow orchestration: the submission state machine and the single
//! place where ranking failures become user-visible state.

use tracing::{error, info};

use crate::assembler;
use crate::client::RankingService;
use crate::collector::InputCollector;
use crate::error::{RankingRequestError, SubmitError};
use crate::types::{RankedCandidate, ResumeFile, SubmissionRequest};

/// Notice shown when submit is attempted without files or a description.
pub const VALIDATION_NOTICE: &str = "Please upload resumes and enter a job description";

/// Generic notice for every ranking failure; the transport/contract
/// distinction lives in the diagnostic log only.
pub const FAILURE_NOTICE: &str = "Error ranking resumes. Please try again.";

/// Orchestration phases. A new submission re-enters `Submitting` from
/// either terminal state; `Failed` replaces prior results wholesale, so a
/// failed re-submission never shows stale rankings beside a fresh error.
#[derive(Debug)]
pub enum WorkflowState {
    Idle,
    Submitting,
    Succeeded(Vec<RankedCandidate>),
    Failed(RankingRequestError),
}

impl WorkflowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, WorkflowState::Failed(_))
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::Idle
    }
}

/// Owns the workflow state and the current input snapshot. All input
/// mutation goes through here; no other component touches either.
#[derive(Debug, Default)]
pub struct SubmitController {
    input: InputCollector,
    state: WorkflowState,
}

impl SubmitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn input(&self) -> &InputCollector {
        &self.input
    }

    /// The current results, present only in the `Succeeded` state.
    pub fn results(&self) -> Option<&[RankedCandidate]> {
        match &self.state {
            WorkflowState::Succeeded(results) => Some(results),
            _ => None,
        }
    }

    /// Whether the trigger control is actionable: never while a
    /// submission is in flight, and only once the input passes the gate.
    pub fn trigger_enabled(&self) -> bool {
        !self.state.is_submitting()
            && assembler::can_submit(self.input.files(), self.input.description())
    }

    // Input events, delegated so the snapshot stays controller-owned.

    pub fn set_files(&mut self, files: Vec<ResumeFile>) {
        self.input.set_files(files);
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.input.set_description(text);
    }

    pub fn set_skills(&mut self, text: impl Into<String>) {
        self.input.set_skills(text);
    }

    pub fn drag_enter(&mut self) {
        self.input.drag_enter();
    }

    pub fn drag_leave(&mut self) {
        self.input.drag_leave();
    }

    pub fn drop_files(&mut self, files: Vec<ResumeFile>) {
        self.input.drop_files(files);
    }

    /// Start a submission: reject while one is in flight, run the
    /// validation gate, then snapshot the request and enter `Submitting`.
    /// A rejected start leaves the state untouched.
    pub fn begin_submit(&mut self) -> Result<SubmissionRequest, SubmitError> {
        if self.state.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        assembler::validate(self.input.files(), self.input.description())?;

        let request = assembler::build_request(
            self.input.files().to_vec(),
            self.input.description().to_string(),
            self.input.skills().to_string(),
        );

        self.state = WorkflowState::Submitting;
        Ok(request)
    }

    /// Apply the outcome of the pending ranking call. Failures are logged
    /// here, the sole translation point, and collapse into `Failed`.
    pub fn complete(&mut self, outcome: Result<Vec<RankedCandidate>, RankingRequestError>) {
        match outcome {
            Ok(results) => {
                info!("Ranking succeeded with {} candidates", results.len());
                self.state = WorkflowState::Succeeded(results);
            }
            Err(err) => {
                error!("Ranking request failed: {}", err);
                self.state = WorkflowState::Failed(err);
            }
        }
    }

    /// Run one full submission against the given service: begin, await
    /// the single suspending call, apply the outcome. Returns `Err` only
    /// when the submission never started; a ranking failure lands in the
    /// `Failed` state instead.
    pub async fn submit(&mut self, service: &dyn RankingService) -> Result<(), SubmitError> {
        let request = self.begin_submit()?;
        let outcome = service.rank(&request).await;
        self.complete(outcome);
        Ok(())
    }
}
