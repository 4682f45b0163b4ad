//! Scripted [`CrawlerClient`] for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{CrawlerState, CrawlerStatus, RunMetrics};
use crate::services::CrawlerClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Start,
    Status,
    Metrics,
}

/// Client that replays scripted responses and records every call.
pub(crate) struct ScriptedClient {
    start: Mutex<Option<Result<()>>>,
    states: Mutex<VecDeque<Result<CrawlerStatus>>>,
    /// Returned once `states` runs dry
    steady_state: CrawlerState,
    metrics: Mutex<Option<Result<RunMetrics>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self {
            start: Mutex::new(None),
            states: Mutex::new(VecDeque::new()),
            steady_state: CrawlerState::Ready,
            metrics: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_states(mut self, states: &[CrawlerState]) -> Self {
        self.states = Mutex::new(
            states
                .iter()
                .cloned()
                .map(|s| Ok(CrawlerStatus::new(s)))
                .collect(),
        );
        self
    }

    pub(crate) fn stuck_in(mut self, state: CrawlerState) -> Self {
        self.steady_state = state;
        self
    }

    pub(crate) fn failing_start(self, message: &str) -> Self {
        *self.start.lock().unwrap() = Some(Err(AppError::remote("StartCrawler", message)));
        self
    }

    pub(crate) fn failing_status(self, message: &str) -> Self {
        self.states
            .lock()
            .unwrap()
            .push_back(Err(AppError::remote("GetCrawler", message)));
        self
    }

    pub(crate) fn with_metrics(self, metrics: Result<RunMetrics>) -> Self {
        *self.metrics.lock().unwrap() = Some(metrics);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, call: Call) -> usize {
        self.calls().into_iter().filter(|c| *c == call).count()
    }
}

#[async_trait]
impl CrawlerClient for ScriptedClient {
    async fn start_crawler(&self, _name: &str) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Start);
        self.start.lock().unwrap().take().unwrap_or(Ok(()))
    }

    async fn crawler_status(&self, _name: &str) -> Result<CrawlerStatus> {
        self.calls.lock().unwrap().push(Call::Status);
        self.states
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CrawlerStatus::new(self.steady_state.clone())))
    }

    async fn crawler_metrics(&self, _name: &str) -> Result<RunMetrics> {
        self.calls.lock().unwrap().push(Call::Metrics);
        self.metrics
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(RunMetrics::default()))
    }
}
