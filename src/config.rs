// src/config.rs

use crate::analysis::ScoreWeights;
use crate::llm::OPENAI_DEFAULT_URL;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::warn;

const DEFAULT_MODELS: &str = "o1,o1-mini,gpt-3.5-turbo";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub openai_api_url: String,
    /// Used when a request does not carry its own key.
    pub openai_api_key: Option<String>,
    /// Models tried in order, each once.
    pub models: Vec<String>,
    pub request_timeout: Duration,
    pub weights: ScoreWeights,
    /// Totals at or above this are highlighted.
    pub highlight_threshold: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            openai_api_url: OPENAI_DEFAULT_URL.to_string(),
            openai_api_key: None,
            models: parse_models(DEFAULT_MODELS),
            request_timeout: Duration::from_secs(30),
            weights: ScoreWeights::default(),
            highlight_threshold: 7.0,
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparseable values are logged and
    /// replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = parse_or(get("BIND_ADDR"), "BIND_ADDR", defaults.bind_addr, |v| {
            v.parse().ok()
        });

        let max_workers = parse_or(get("MAX_WORKERS"), "MAX_WORKERS", defaults.max_workers, |v| {
            v.parse().ok().filter(|n: &usize| *n > 0)
        });

        let models = parse_or(get("ANALYZER_MODELS"), "ANALYZER_MODELS", defaults.models, |v| {
            Some(parse_models(v)).filter(|m| !m.is_empty())
        });

        let request_timeout = parse_or(
            get("ANALYZER_TIMEOUT_SECS"),
            "ANALYZER_TIMEOUT_SECS",
            defaults.request_timeout,
            |v| {
                v.parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .map(Duration::from_secs)
            },
        );

        let weights = parse_or(get("SCORE_WEIGHTS"), "SCORE_WEIGHTS", defaults.weights, |v| {
            ScoreWeights::parse(v)
        });

        let highlight_threshold = parse_or(
            get("HIGHLIGHT_THRESHOLD"),
            "HIGHLIGHT_THRESHOLD",
            defaults.highlight_threshold,
            |v| {
                v.parse::<f64>()
                    .ok()
                    .filter(|t| (0.0..=10.0).contains(t))
            },
        );

        Self {
            bind_addr,
            max_workers,
            openai_api_url: get("OPENAI_API_URL").unwrap_or(defaults.openai_api_url),
            openai_api_key: get("OPENAI_API_KEY"),
            models,
            request_timeout,
            weights,
            highlight_threshold,
        }
    }
}

fn parse_or<T, P>(raw: Option<String>, key: &str, default: T, parse: P) -> T
where
    P: FnOnce(&str) -> Option<T>,
{
    let Some(raw) = raw else {
        return default;
    };

    match parse(&raw) {
        Some(value) => value,
        None => {
            warn!(key, value = %raw, "config.invalid_value_using_default");
            default
        }
    }
}

fn parse_models(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
