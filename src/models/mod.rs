// src/models/mod.rs

//! Domain models for the crawler trigger.

mod config;
mod run;

// Re-export all public types
pub use config::{RawInputs, RunConfig, input};
pub use run::{CrawlerState, CrawlerStatus, RunMetrics, RunResult};
