//! Remote service boundary.
//!
//! The run pipeline only talks to Glue through [`CrawlerClient`], so tests
//! can drive it with a scripted client.

pub mod glue;
#[cfg(test)]
pub(crate) mod scripted;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CrawlerStatus, RunMetrics};

pub use glue::GlueCrawlerClient;

/// Operations the run pipeline needs from the crawler service.
#[async_trait]
pub trait CrawlerClient: Send + Sync {
    /// Start a run of the named crawler.
    async fn start_crawler(&self, name: &str) -> Result<()>;

    /// Fetch the crawler's current state.
    async fn crawler_status(&self, name: &str) -> Result<CrawlerStatus>;

    /// Fetch table counts for the crawler's last run.
    async fn crawler_metrics(&self, name: &str) -> Result<RunMetrics>;
}
