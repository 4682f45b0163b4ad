//! AWS Lambda entry point for the Glue crawler trigger
//!
//! Deploy with `cargo lambda build --release --features lambda`

use lambda_runtime::{Error as LambdaError, service_fn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glue_crawler_trigger::lambda::handler;

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Glue crawler trigger Lambda starting...");
    lambda_runtime::run(service_fn(handler)).await
}
