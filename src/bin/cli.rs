//! Glue crawler trigger CLI
//!
//! CI entry point. Inputs come from `INPUT_*` environment variables and can
//! be overridden with flags. For AWS Lambda, use `glue-crawler-trigger-lambda`.

use std::process::ExitCode;

use clap::Parser;
use glue_crawler_trigger::{
    config, models::RawInputs, pipeline, services::GlueCrawlerClient, utils::OutputSink,
};

/// Start an AWS Glue crawler and optionally wait for it to finish
#[derive(Parser, Debug)]
#[command(name = "glue-crawler-trigger", version)]
struct Cli {
    /// Name of the crawler to start [env: INPUT_CRAWLER-NAME]
    #[arg(long)]
    crawler_name: Option<String>,

    /// Wait for the crawler to return to READY ("true" to wait) [env: INPUT_WAIT-FOR-COMPLETION]
    #[arg(long)]
    wait_for_completion: Option<String>,

    /// Maximum minutes to wait [env: INPUT_TIMEOUT-MINUTES]
    #[arg(long)]
    timeout_minutes: Option<String>,

    /// Data Catalog ID; accepted but not used [env: INPUT_CATALOG-ID]
    #[arg(long)]
    catalog_id: Option<String>,

    /// AWS region override [env: INPUT_AWS-REGION]
    #[arg(long)]
    aws_region: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn inputs(&self) -> RawInputs {
        RawInputs {
            crawler_name: self.crawler_name.clone(),
            wait_for_completion: self.wait_for_completion.clone(),
            timeout_minutes: self.timeout_minutes.clone(),
            catalog_id: self.catalog_id.clone(),
            aws_region: self.aws_region.clone(),
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let inputs = config::load_inputs().merge(cli.inputs());
    let client = GlueCrawlerClient::from_env(inputs.aws_region.clone()).await;
    let sink = OutputSink::from_env();

    pipeline::execute(&client, &inputs, &sink).await
}
