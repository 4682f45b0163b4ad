//! Crawler state and run outcome types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Crawler state as reported by Glue.
///
/// Only `Ready` carries meaning for the run; everything else is waited on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CrawlerState {
    Ready,
    Running,
    Stopping,
    /// Any value this crate does not know about
    Other(String),
}

impl CrawlerState {
    pub fn as_str(&self) -> &str {
        match self {
            CrawlerState::Ready => "READY",
            CrawlerState::Running => "RUNNING",
            CrawlerState::Stopping => "STOPPING",
            CrawlerState::Other(value) => value,
        }
    }

    /// Whether the crawler has finished and is idle again.
    pub fn is_terminal(&self) -> bool {
        *self == CrawlerState::Ready
    }
}

impl From<&str> for CrawlerState {
    fn from(value: &str) -> Self {
        match value {
            "READY" => CrawlerState::Ready,
            "RUNNING" => CrawlerState::Running,
            "STOPPING" => CrawlerState::Stopping,
            other => CrawlerState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CrawlerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CrawlerState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CrawlerState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(CrawlerState::from(value.as_str()))
    }
}

/// Point-in-time view of a crawler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerStatus {
    pub state: CrawlerState,
    /// Status of the most recent completed crawl (SUCCEEDED, CANCELLED, FAILED)
    pub last_crawl_status: Option<String>,
    pub last_crawl_error: Option<String>,
}

impl CrawlerStatus {
    pub fn new(state: CrawlerState) -> Self {
        Self {
            state,
            last_crawl_status: None,
            last_crawl_error: None,
        }
    }

    /// Whether the last completed crawl ended in something other than success.
    pub fn last_crawl_unsuccessful(&self) -> bool {
        matches!(
            self.last_crawl_status.as_deref(),
            Some("FAILED") | Some("CANCELLED")
        )
    }
}

/// Catalog changes made by the crawler's last run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub tables_created: u64,
    pub tables_updated: u64,
    pub tables_deleted: u64,
}

/// Outcome of one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub success: bool,
    pub final_state: CrawlerState,
    pub metrics: RunMetrics,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunResult {
    /// Successful run that observed `final_state`.
    pub fn completed(
        final_state: CrawlerState,
        metrics: RunMetrics,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            success: true,
            final_state,
            metrics,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Crawler was started but not waited on.
    pub fn started(started_at: DateTime<Utc>) -> Self {
        Self::completed(CrawlerState::Running, RunMetrics::default(), started_at)
    }

    /// Named values exposed to the CI runner for this result.
    pub fn outputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("success", self.success.to_string()),
            ("state", self.final_state.to_string()),
            ("tables-created", self.metrics.tables_created.to_string()),
            ("tables-updated", self.metrics.tables_updated.to_string()),
            ("tables-deleted", self.metrics.tables_deleted.to_string()),
        ]
    }
}
