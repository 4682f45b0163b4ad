// src/config.rs

//! Input loading utilities.
//!
//! CI runners pass step inputs as environment variables named
//! `INPUT_<NAME>`, where `<NAME>` is the input name upper-cased with spaces
//! replaced by underscores. Hyphens are kept, so `crawler-name` arrives as
//! `INPUT_CRAWLER-NAME`.

use crate::models::{RawInputs, input};

/// Environment variable that carries the input `name`.
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Read inputs through `lookup`, which maps an environment key to a value.
///
/// Values are trimmed and blank values count as not supplied.
pub fn load_inputs_with<F>(lookup: F) -> RawInputs
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| {
        lookup(&input_env_key(name))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    RawInputs {
        crawler_name: get(input::CRAWLER_NAME),
        wait_for_completion: get(input::WAIT_FOR_COMPLETION),
        timeout_minutes: get(input::TIMEOUT_MINUTES),
        catalog_id: get(input::CATALOG_ID),
        aws_region: get(input::AWS_REGION),
    }
}

/// Read inputs from the process environment.
pub fn load_inputs() -> RawInputs {
    load_inputs_with(|key| std::env::var(key).ok())
}
