// src/pipeline/run.rs

//! Crawler run pipeline: start, wait for READY, collect metrics.

use std::time::Duration;

use chrono::Utc;
use tokio::time::{Instant, sleep};

use crate::error::{AppError, Result};
use crate::models::{CrawlerStatus, RunConfig, RunMetrics, RunResult, input};
use crate::services::CrawlerClient;

/// Delay between status checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Start the configured crawler and, if asked, wait for it to finish.
pub async fn run_crawler(client: &dyn CrawlerClient, config: &RunConfig) -> Result<RunResult> {
    let name = config.crawler_name.trim();
    if name.is_empty() {
        return Err(AppError::missing_input(input::CRAWLER_NAME));
    }

    if let Some(catalog_id) = &config.catalog_id {
        log::debug!("catalog-id {} accepted; StartCrawler does not take it", catalog_id);
    }

    let started_at = Utc::now();
    log::info!("Starting crawler {}", name);
    client.start_crawler(name).await?;
    log::info!("Crawler {} started", name);

    if !config.wait_for_completion {
        log::info!("Not waiting for completion");
        return Ok(RunResult::started(started_at));
    }

    let status = wait_for_ready(client, name, config.timeout_minutes).await?;
    if status.last_crawl_unsuccessful() {
        log::warn!(
            "Crawler {} is READY but its last crawl was {}: {}",
            name,
            status.last_crawl_status.as_deref().unwrap_or_default(),
            status.last_crawl_error.as_deref().unwrap_or("no error message")
        );
    }

    let metrics = match client.crawler_metrics(name).await {
        Ok(metrics) => metrics,
        Err(e) => {
            log::warn!(
                "{} failed for crawler {}, reporting zero metrics: {}",
                e.operation().unwrap_or("Metrics lookup"),
                name,
                e
            );
            RunMetrics::default()
        }
    };

    log::info!(
        "Crawler {} finished: {} tables created, {} updated, {} deleted",
        name,
        metrics.tables_created,
        metrics.tables_updated,
        metrics.tables_deleted
    );

    Ok(RunResult::completed(status.state, metrics, started_at))
}

/// Poll until the crawler reports READY or the timeout elapses.
///
/// The timeout is checked once per poll, so a run may overshoot it by up to
/// one [`POLL_INTERVAL`].
async fn wait_for_ready(
    client: &dyn CrawlerClient,
    name: &str,
    timeout_minutes: u64,
) -> Result<CrawlerStatus> {
    let timeout = Duration::from_secs(timeout_minutes.saturating_mul(60));
    let start = Instant::now();

    loop {
        let status = client.crawler_status(name).await?;
        if status.state.is_terminal() {
            return Ok(status);
        }

        let elapsed = start.elapsed();
        if elapsed > timeout {
            return Err(AppError::timeout(timeout_minutes));
        }

        log::info!(
            "Crawler {} is {} ({}s elapsed)",
            name,
            status.state,
            elapsed.as_secs()
        );
        sleep(POLL_INTERVAL).await;
    }
}
