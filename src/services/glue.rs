//! AWS Glue implementation of [`CrawlerClient`].

use async_trait::async_trait;
use aws_sdk_glue::Client;
use aws_sdk_glue::config::Region;
use aws_sdk_glue::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_glue::types::CrawlerMetrics;

use crate::error::{AppError, Result};
use crate::models::{CrawlerState, CrawlerStatus, RunMetrics};
use crate::services::CrawlerClient;

/// Glue crawler client backed by the AWS SDK.
#[derive(Clone, Debug)]
pub struct GlueCrawlerClient {
    client: Client,
}

impl GlueCrawlerClient {
    /// Wrap an existing SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a client from the standard AWS provider chain.
    ///
    /// `region` overrides whatever region the environment resolves to.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl CrawlerClient for GlueCrawlerClient {
    async fn start_crawler(&self, name: &str) -> Result<()> {
        self.client
            .start_crawler()
            .name(name)
            .send()
            .await
            .map_err(|e| remote_error("StartCrawler", e))?;
        Ok(())
    }

    async fn crawler_status(&self, name: &str) -> Result<CrawlerStatus> {
        let output = self
            .client
            .get_crawler()
            .name(name)
            .send()
            .await
            .map_err(|e| remote_error("GetCrawler", e))?;

        let crawler = output
            .crawler()
            .ok_or_else(|| AppError::remote("GetCrawler", format!("Crawler {name} not found")))?;
        let state = crawler.state().ok_or_else(|| {
            AppError::remote("GetCrawler", format!("Crawler {name} reported no state"))
        })?;

        let last_crawl = crawler.last_crawl();
        Ok(CrawlerStatus {
            state: CrawlerState::from(state.as_str()),
            last_crawl_status: last_crawl
                .and_then(|info| info.status())
                .map(|status| status.as_str().to_string()),
            last_crawl_error: last_crawl
                .and_then(|info| info.error_message())
                .map(str::to_string),
        })
    }

    async fn crawler_metrics(&self, name: &str) -> Result<RunMetrics> {
        let output = self
            .client
            .get_crawler_metrics()
            .crawler_name_list(name)
            .send()
            .await
            .map_err(|e| remote_error("GetCrawlerMetrics", e))?;

        let metrics = output
            .crawler_metrics_list
            .unwrap_or_default()
            .into_iter()
            .find(|m| m.crawler_name.as_deref().is_none_or(|n| n == name))
            .map(to_run_metrics)
            .unwrap_or_default();
        Ok(metrics)
    }
}

fn to_run_metrics(metrics: CrawlerMetrics) -> RunMetrics {
    RunMetrics {
        tables_created: non_negative(metrics.tables_created),
        tables_updated: non_negative(metrics.tables_updated),
        tables_deleted: non_negative(metrics.tables_deleted),
    }
}

fn non_negative(count: i32) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

/// Keep the service's own message; fall back to the full error chain when
/// the failure never reached the service.
fn remote_error<E>(operation: &str, err: E) -> AppError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err.message() {
        Some(message) => AppError::remote(operation, message),
        None => AppError::remote(operation, DisplayErrorContext(&err)),
    }
}
