// src/client.rs
//! HTTP client for the remote ranking service.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{error, info};

use crate::config::ServiceConfig;
use crate::error::RankingRequestError;
use crate::types::{RankedCandidate, RankingResponse, SubmissionRequest};

const RANK_RESUMES_ENDPOINT: &str = "/rank_resumes/";

/// The ranking call as an injectable capability. The controller holds the
/// trait, so tests can swap in a fake implementation without network I/O.
#[async_trait]
pub trait RankingService: Send + Sync {
    async fn rank(
        &self,
        request: &SubmissionRequest,
    ) -> Result<Vec<RankedCandidate>, RankingRequestError>;
}

/// Thin transport wrapper around the ranking endpoint: one multipart POST
/// per submission, no retry, no chunking.
pub struct RankingClient {
    client: reqwest::Client,
    base_url: String,
}

impl RankingClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn build_form(request: &SubmissionRequest) -> Result<Form, RankingRequestError> {
        // jd_skills is always present, the service requires the field even
        // when no skills were entered.
        let mut form = Form::new()
            .text("job_description", request.job.description.clone())
            .text("jd_skills", request.job.skills.clone());

        for resume in &request.resumes {
            let part = Part::bytes(resume.content.clone())
                .file_name(resume.file_name.clone())
                .mime_str(&resume.media_type)?;
            form = form.part("files", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl RankingService for RankingClient {
    async fn rank(
        &self,
        request: &SubmissionRequest,
    ) -> Result<Vec<RankedCandidate>, RankingRequestError> {
        let url = format!("{}{}", self.base_url, RANK_RESUMES_ENDPOINT);
        let form = Self::build_form(request)?;

        info!(
            "Calling ranking service: {} ({} resumes)",
            url,
            request.resumes.len()
        );

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Ranking service error response {}: {}", status, error_text);
            return Err(RankingRequestError::Status {
                status,
                message: error_text,
            });
        }

        let body = response.text().await?;
        decode_results(&body)
    }
}

/// Decode a success body into the results list. The array is passed
/// through unmodified; the client never re-sorts or re-scores it.
pub fn decode_results(body: &str) -> Result<Vec<RankedCandidate>, RankingRequestError> {
    let response: RankingResponse = serde_json::from_str(body)
        .map_err(|e| RankingRequestError::Contract(e.to_string()))?;

    Ok(response.results)
}
