//! Wger exercise API client.
//!
//! The request goes through a [`Relay`] (a public proxy) unless configured as
//! `direct`. The response is expected to be `{"results": [{"name", "description"}]}`.

use super::{clean_description, ExerciseSource, FetchError};
use crate::config::{FitcrmConfig, Relay};
use crate::error::{FitcrmError, Result};
use crate::model::ExerciseSuggestion;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ExercisePage {
    results: Vec<RemoteExercise>,
}

#[derive(Debug, Deserialize)]
struct RemoteExercise {
    name: Option<String>,
    description: Option<String>,
}

pub struct WgerSource {
    client: Client,
    url: Url,
}

impl WgerSource {
    pub fn new(config: &FitcrmConfig) -> Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    fn with_builder(config: &FitcrmConfig, builder: ClientBuilder) -> Result<Self> {
        let url = request_url(config)?;
        let client = builder
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("fitcrm/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FitcrmError::Api(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ExerciseSource for WgerSource {
    fn fetch(&self) -> std::result::Result<Vec<ExerciseSuggestion>, FetchError> {
        debug!(url = %self.url, "fetching exercises");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_payload(&body)
    }
}

/// Full URL to request: the API page, wrapped by the relay if any.
pub fn request_url(config: &FitcrmConfig) -> Result<Url> {
    let target = Url::parse_with_params(
        &config.api_url,
        &[
            ("language", config.language.to_string()),
            ("limit", config.limit.to_string()),
        ],
    )
    .map_err(|e| FitcrmError::Config(format!("Invalid api-url '{}': {}", config.api_url, e)))?;

    relay_url(config.relay, &target)
}

fn relay_url(relay: Relay, target: &Url) -> Result<Url> {
    match relay.endpoint() {
        None => Ok(target.clone()),
        Some(endpoint) => Url::parse_with_params(endpoint, &[("url", target.as_str())])
            .map_err(|e| FitcrmError::Config(format!("Invalid relay endpoint: {}", e))),
    }
}

/// Turns a response body into display-ready suggestions.
pub fn parse_payload(body: &str) -> std::result::Result<Vec<ExerciseSuggestion>, FetchError> {
    let page: ExercisePage =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    if page.results.is_empty() {
        return Err(FetchError::Empty);
    }

    page.results
        .into_iter()
        .map(|item| {
            let name = item
                .name
                .filter(|n| !n.trim().is_empty())
                .ok_or_else(|| FetchError::Malformed("exercise without a name".to_string()))?;
            Ok(ExerciseSuggestion {
                name,
                description: clean_description(item.description.as_deref()),
            })
        })
        .collect()
}
