// src/lambda/mod.rs

//! AWS Lambda handler for the crawler trigger.
//!
//! This module provides the Lambda function entry point that:
//! 1. Reads a [`RunConfig`] from the invocation payload
//! 2. Starts the crawler and optionally waits for READY
//! 3. Returns the run outcome, or the error message on failure
//!
//! Lambda invocations are capped at 15 minutes, so `timeout_minutes` should
//! stay below the function's configured timeout.

use chrono::{DateTime, Utc};
use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::error::Result;
use crate::models::{CrawlerState, RunConfig, RunMetrics, RunResult};
use crate::pipeline::run_crawler;
use crate::services::GlueCrawlerClient;

/// Lambda response payload.
#[derive(Debug, Default, Serialize)]
pub struct TriggerResponse {
    /// Whether the run was successful
    pub success: bool,

    /// Final crawler state (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CrawlerState>,

    /// Catalog changes (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<RunMetrics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    /// Error message if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,
}

impl TriggerResponse {
    fn from_outcome(outcome: Result<RunResult>, execution_time_ms: u64) -> Self {
        match outcome {
            Ok(result) => Self {
                success: result.success,
                state: Some(result.final_state),
                metrics: Some(result.metrics),
                started_at: Some(result.started_at),
                finished_at: Some(result.finished_at),
                error: None,
                execution_time_ms,
            },
            Err(e) => Self {
                success: false,
                error: Some(e.to_string()),
                execution_time_ms,
                ..Default::default()
            },
        }
    }
}

/// Main Lambda handler function.
#[instrument(skip(event))]
pub async fn handler(
    event: LambdaEvent<RunConfig>,
) -> std::result::Result<TriggerResponse, LambdaError> {
    let start = std::time::Instant::now();
    let (config, _context) = event.into_parts();

    info!(
        "Triggering crawler: name={}, wait={}, timeout_minutes={}",
        config.crawler_name, config.wait_for_completion, config.timeout_minutes
    );

    let outcome = trigger(&config).await;
    let response = TriggerResponse::from_outcome(outcome, start.elapsed().as_millis() as u64);

    match &response.error {
        None => info!(
            "Crawler run completed in {}ms: {:?}",
            response.execution_time_ms, response.metrics
        ),
        Some(message) => error!("Crawler run failed: {}", message),
    }
    Ok(response)
}

/// Internal trigger logic.
async fn trigger(config: &RunConfig) -> Result<RunResult> {
    config.validate()?;
    let client = GlueCrawlerClient::from_env(None).await;
    run_crawler(&client, config).await
}
