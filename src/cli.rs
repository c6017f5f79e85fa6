// src/cli.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::client::RankingClient;
use crate::collector::{DiskFileSource, FileSource};
use crate::config::ServiceConfig;
use crate::controller::{SubmitController, WorkflowState, FAILURE_NOTICE, VALIDATION_NOTICE};
use crate::render::render_table;

#[derive(Parser)]
#[command(name = "smarthire")]
#[command(about = "Rank candidate resumes against a job description")]
pub struct RankCli {
    /// Resume files to submit
    #[arg(required = true)]
    pub resumes: Vec<PathBuf>,

    /// Job description text
    #[arg(long, conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    pub description_file: Option<PathBuf>,

    /// Comma-separated required skills
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Ranking service base URL (overrides SMARTHIRE_SERVICE_URL)
    #[arg(long)]
    pub service_url: Option<String>,
}

pub async fn run(cli: RankCli) -> Result<()> {
    let config = match cli.service_url {
        Some(url) => ServiceConfig::from_env().with_base_url(url),
        None => ServiceConfig::from_env(),
    };

    let description = match (cli.description, cli.description_file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read job description: {}", path.display()))?,
        (None, None) => String::new(),
    };

    let mut controller = SubmitController::new();

    let source = DiskFileSource::new(cli.resumes);
    let files = source.acquire_files().await?;
    info!("{} file(s) selected", files.len());

    controller.set_files(files);
    controller.set_description(description);
    controller.set_skills(cli.skills);

    let client = RankingClient::new(&config)?;

    if let Err(err) = controller.submit(&client).await {
        anyhow::bail!("{}: {}", VALIDATION_NOTICE, err);
    }

    match controller.state() {
        WorkflowState::Succeeded(results) => {
            print!("{}", render_table(results));
            Ok(())
        }
        WorkflowState::Failed(_) => {
            // The diagnostic detail is already in the log.
            anyhow::bail!("{}", FAILURE_NOTICE)
        }
        _ => Ok(()),
    }
}
