//! Pipeline entry points for crawler runs.
//!
//! - `run_crawler`: start a crawler and optionally wait for it to finish
//! - `execute`: run as a CI step, writing outputs and choosing the exit code

pub mod action;
pub mod run;

pub use action::execute;
pub use run::{POLL_INTERVAL, run_crawler};
