// src/pipeline/action.rs

//! CI step entry: inputs in, outputs and exit code out.

use std::process::ExitCode;

use crate::error::Result;
use crate::models::{RawInputs, RunConfig, RunResult};
use crate::pipeline::run_crawler;
use crate::services::CrawlerClient;
use crate::utils::{OutputSink, annotate_error};

/// Run the step and report the outcome to the CI runner.
///
/// On success every output is written and the exit code is zero. On any
/// error only `success=false` is written, the message is logged and
/// annotated, and the exit code is non-zero.
pub async fn execute(
    client: &dyn CrawlerClient,
    inputs: &RawInputs,
    sink: &OutputSink,
) -> ExitCode {
    let reported = match run(client, inputs).await {
        Ok(result) => sink.write_result(&result),
        Err(e) => return fail(sink, &e.to_string()),
    };

    match reported {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(sink, &e.to_string()),
    }
}

async fn run(client: &dyn CrawlerClient, inputs: &RawInputs) -> Result<RunResult> {
    let config = RunConfig::from_inputs(inputs)?;

    log::info!(
        "Crawler {}: wait={}, timeout={}m",
        config.crawler_name,
        config.wait_for_completion,
        config.timeout_minutes
    );

    run_crawler(client, &config).await
}

fn fail(sink: &OutputSink, message: &str) -> ExitCode {
    log::error!("{}", message);
    annotate_error(message);
    if let Err(e) = sink.write_failure() {
        log::error!("Could not write outputs: {}", e);
    }
    ExitCode::FAILURE
}
