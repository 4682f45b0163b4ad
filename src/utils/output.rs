// src/utils/output.rs

//! Step outputs and workflow annotations for the CI runner.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;

use crate::error::Result;
use crate::models::RunResult;

/// Where step outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Append to the runner's output file
    File(PathBuf),
    /// Print `name=value` lines to stdout
    Stdout,
}

impl OutputSink {
    /// Use the file named by `GITHUB_OUTPUT`, or stdout when it is unset.
    pub fn from_env() -> Self {
        match std::env::var_os("GITHUB_OUTPUT") {
            Some(path) if !path.is_empty() => OutputSink::File(PathBuf::from(path)),
            _ => OutputSink::Stdout,
        }
    }

    /// Write every output of a successful run.
    pub fn write_result(&self, result: &RunResult) -> Result<()> {
        self.write(&result.outputs())
    }

    /// Write the outputs of a failed run; only `success` is set.
    pub fn write_failure(&self) -> Result<()> {
        self.write(&[("success", "false".to_string())])
    }

    /// Write named outputs.
    pub fn write(&self, outputs: &[(&str, String)]) -> Result<()> {
        match self {
            OutputSink::File(path) => {
                // One write so a failure never leaves a partial set behind.
                let block: String = outputs
                    .iter()
                    .map(|(name, value)| format_output(name, value))
                    .collect();
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(block.as_bytes())?;
                log::debug!("Wrote {} outputs to {}", outputs.len(), path.display());
            }
            OutputSink::Stdout => {
                for (name, value) in outputs {
                    println!("{}={}", name, value);
                }
            }
        }
        Ok(())
    }
}

/// Format one output for the runner's output file.
///
/// Multi-line values use the heredoc form.
fn format_output(name: &str, value: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        let delimiter = format!(
            "ghadelimiter_{}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );
        format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
    } else {
        format!("{name}={value}\n")
    }
}

/// Emit an error annotation when running under GitHub Actions.
pub fn annotate_error(message: &str) {
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        println!("::error::{}", escape_data(message));
    }
}

/// Escape a workflow command payload.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
