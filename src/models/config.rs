//! Run configuration structures.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Input names as the CI runner exposes them.
pub mod input {
    pub const CRAWLER_NAME: &str = "crawler-name";
    pub const WAIT_FOR_COMPLETION: &str = "wait-for-completion";
    pub const TIMEOUT_MINUTES: &str = "timeout-minutes";
    pub const CATALOG_ID: &str = "catalog-id";
    pub const AWS_REGION: &str = "aws-region";
}

/// Inputs exactly as supplied, before defaults and parsing.
///
/// `None` means the input was not supplied (or was blank).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub crawler_name: Option<String>,
    pub wait_for_completion: Option<String>,
    pub timeout_minutes: Option<String>,
    pub catalog_id: Option<String>,
    pub aws_region: Option<String>,
}

impl RawInputs {
    /// Layer `overrides` on top of `self`; supplied values in `overrides` win.
    pub fn merge(self, overrides: RawInputs) -> RawInputs {
        RawInputs {
            crawler_name: overrides.crawler_name.or(self.crawler_name),
            wait_for_completion: overrides.wait_for_completion.or(self.wait_for_completion),
            timeout_minutes: overrides.timeout_minutes.or(self.timeout_minutes),
            catalog_id: overrides.catalog_id.or(self.catalog_id),
            aws_region: overrides.aws_region.or(self.aws_region),
        }
    }
}

/// Validated configuration for a single crawler run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Name of the Glue crawler to start
    #[serde(default)]
    pub crawler_name: String,

    /// Block until the crawler returns to READY
    #[serde(default = "defaults::wait_for_completion")]
    pub wait_for_completion: bool,

    /// Upper bound on the wait, in minutes
    #[serde(default = "defaults::timeout_minutes")]
    pub timeout_minutes: u64,

    /// Accepted for compatibility. Glue's StartCrawler has no catalog
    /// parameter, so this does not affect which crawler is started.
    #[serde(default)]
    pub catalog_id: Option<String>,
}

impl RunConfig {
    /// Build a config for `crawler_name` with every other field defaulted.
    pub fn new(crawler_name: impl Into<String>) -> Self {
        Self {
            crawler_name: crawler_name.into(),
            wait_for_completion: defaults::wait_for_completion(),
            timeout_minutes: defaults::timeout_minutes(),
            catalog_id: None,
        }
    }

    /// Apply defaults to raw inputs, parse them, and validate the result.
    pub fn from_inputs(raw: &RawInputs) -> Result<Self> {
        let crawler_name = raw
            .crawler_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::missing_input(input::CRAWLER_NAME))?
            .to_string();

        // Only the exact string "true" enables waiting.
        let wait_for_completion = raw
            .wait_for_completion
            .as_deref()
            .map(|value| value == "true")
            .unwrap_or_else(defaults::wait_for_completion);

        let timeout_minutes = match raw.timeout_minutes.as_deref() {
            Some(value) => parse_minutes(value)?,
            None => defaults::timeout_minutes(),
        };

        let config = Self {
            crawler_name,
            wait_for_completion,
            timeout_minutes,
            catalog_id: raw.catalog_id.clone(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler_name.trim().is_empty() {
            return Err(AppError::missing_input(input::CRAWLER_NAME));
        }
        if self.timeout_minutes == 0 {
            return Err(AppError::config(format!(
                "{} must be a positive integer",
                input::TIMEOUT_MINUTES
            )));
        }
        Ok(())
    }
}

fn parse_minutes(value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|e| {
        AppError::config(format!(
            "{} must be a positive integer, got '{}': {}",
            input::TIMEOUT_MINUTES,
            value,
            e
        ))
    })
}

mod defaults {
    pub fn wait_for_completion() -> bool {
        true
    }
    pub fn timeout_minutes() -> u64 {
        60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> RawInputs {
        RawInputs {
            crawler_name: Some(name.to_string()),
            ..RawInputs::default()
        }
    }

    #[test]
    fn defaults_apply_when_only_name_given() {
        let config = RunConfig::from_inputs(&named("nightly-sales")).unwrap();
        assert_eq!(config.crawler_name, "nightly-sales");
        assert!(config.wait_for_completion);
        assert_eq!(config.timeout_minutes, 60);
        assert!(config.catalog_id.is_none());
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = RunConfig::from_inputs(&RawInputs::default()).unwrap_err();
        assert!(matches!(err, AppError::MissingInput(ref name) if name == "crawler-name"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = RunConfig::from_inputs(&named("   ")).unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }

    #[test]
    fn name_is_trimmed() {
        let config = RunConfig::from_inputs(&named("  raw-events \n")).unwrap();
        assert_eq!(config.crawler_name, "raw-events");
    }

    #[test]
    fn wait_requires_exact_true() {
        for (value, expected) in [("true", true), ("false", false), ("TRUE", false), ("yes", false)] {
            let raw = RawInputs {
                wait_for_completion: Some(value.to_string()),
                ..named("c")
            };
            assert_eq!(
                RunConfig::from_inputs(&raw).unwrap().wait_for_completion,
                expected,
                "wait-for-completion={value}"
            );
        }
    }

    #[test]
    fn timeout_is_parsed() {
        let raw = RawInputs {
            timeout_minutes: Some("15".to_string()),
            ..named("c")
        };
        assert_eq!(RunConfig::from_inputs(&raw).unwrap().timeout_minutes, 15);
    }

    #[test]
    fn invalid_timeouts_are_rejected() {
        for value in ["abc", "-5", "0", "1.5"] {
            let raw = RawInputs {
                timeout_minutes: Some(value.to_string()),
                ..named("c")
            };
            let err = RunConfig::from_inputs(&raw).unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "timeout-minutes={value}");
        }
    }

    #[test]
    fn catalog_id_is_carried_through() {
        let raw = RawInputs {
            catalog_id: Some("123456789012".to_string()),
            ..named("c")
        };
        assert_eq!(
            RunConfig::from_inputs(&raw).unwrap().catalog_id.as_deref(),
            Some("123456789012")
        );
    }

    #[test]
    fn merge_prefers_overrides() {
        let env = RawInputs {
            crawler_name: Some("from-env".to_string()),
            timeout_minutes: Some("30".to_string()),
            ..RawInputs::default()
        };
        let flags = RawInputs {
            crawler_name: Some("from-flag".to_string()),
            ..RawInputs::default()
        };
        let merged = env.merge(flags);
        assert_eq!(merged.crawler_name.as_deref(), Some("from-flag"));
        assert_eq!(merged.timeout_minutes.as_deref(), Some("30"));
    }

    #[test]
    fn deserialize_applies_defaults() {
        let config: RunConfig = serde_json::from_str(r#"{"crawler_name": "c"}"#).unwrap();
        assert_eq!(config, RunConfig::new("c"));
    }

    #[test]
    fn deserialized_config_without_name_fails_validation() {
        let config: RunConfig = serde_json::from_str(r#"{"timeout_minutes": 5}"#).unwrap();
        assert!(matches!(config.validate(), Err(AppError::MissingInput(_))));
    }
}
