use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::plan::probability::ProbabilityMode;
use crate::plan::rules::TargetingRule;

/// Application configuration loaded from environment variables.
/// Nothing is required; every setting has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub probability_mode: ProbabilityMode,
    /// Seed for the optimized-score offset. Unset → fresh randomness per plan.
    pub probability_seed: Option<u64>,
    /// Pins the optimized score. Takes precedence over the seed.
    pub optimized_score: Option<u8>,
    pub targeting_rule: TargetingRule,
    pub tailor_no_ats_format_issue: bool,
    pub legacy_key_normalization: bool,
}

/// A setting whose value is not one of the accepted spellings.
#[derive(Debug, Error)]
#[error("{setting} has unknown value '{value}'")]
pub struct UnknownSetting {
    pub setting: &'static str,
    pub value: String,
}

impl UnknownSetting {
    pub fn new(setting: &'static str, value: &str) -> Self {
        Self {
            setting,
            value: value.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            probability_mode: ProbabilityMode::Additive,
            probability_seed: None,
            optimized_score: None,
            targeting_rule: TargetingRule::Report,
            tailor_no_ats_format_issue: true,
            legacy_key_normalization: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            probability_mode: parse_setting("PROBABILITY_MODE")?
                .unwrap_or(defaults.probability_mode),
            probability_seed: optional_env("PROBABILITY_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("PROBABILITY_SEED must be an unsigned integer")?,
            optimized_score: optional_env("OPTIMIZED_SCORE")
                .map(|v| v.parse::<u8>())
                .transpose()
                .context("OPTIMIZED_SCORE must be an integer between 0 and 255")?,
            targeting_rule: parse_setting("TARGETING_RULE")?.unwrap_or(defaults.targeting_rule),
            tailor_no_ats_format_issue: optional_env("TAILOR_NO_ATS_FORMAT_ISSUES")
                .map(|v| parse_flag("TAILOR_NO_ATS_FORMAT_ISSUES", &v))
                .transpose()?
                .unwrap_or(defaults.tailor_no_ats_format_issue),
            legacy_key_normalization: optional_env("LEGACY_KEY_NORMALIZATION")
                .map(|v| parse_flag("LEGACY_KEY_NORMALIZATION", &v))
                .transpose()?
                .unwrap_or(defaults.legacy_key_normalization),
        })
    }
}

/// Unset and blank variables both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_setting<T>(key: &'static str) -> Result<Option<T>>
where
    T: FromStr<Err = UnknownSetting>,
{
    optional_env(key)
        .map(|v| v.parse::<T>())
        .transpose()
        .with_context(|| format!("Invalid value for environment variable '{key}'"))
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, UnknownSetting> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(UnknownSetting::new(key, value)),
    }
}
