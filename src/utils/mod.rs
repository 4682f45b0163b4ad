//! Utility functions and helpers.

pub mod output;

pub use output::{OutputSink, annotate_error};
