// src/lib.rs

//! Glue crawler trigger library
//!
//! Starts an AWS Glue crawler, optionally waits for it to return to READY,
//! and reports the catalog changes of the run.

pub mod config;
pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
