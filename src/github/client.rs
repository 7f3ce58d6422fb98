//! GitHub events client
//!
//! Issues the single request for a user's public events and classifies
//! failures.

use std::net::IpAddr;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, info};

use super::ActivityError;
use super::constants::{endpoints, headers};
use crate::config::Config;
use crate::model::RawEvent;

/// Client for the GitHub REST API
///
/// Base URL, headers and timeout are fixed at construction.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GitHubClient {
    /// Create a client from the configuration
    pub fn new(config: &Config) -> Result<Self, ActivityError> {
        Self::with_options(&config.api_url, config.timeout)
    }

    /// Create a client for a specific base URL
    pub fn with_options(base_url: &str, timeout: Option<Duration>) -> Result<Self, ActivityError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ActivityError::Config(format!("bad API URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ActivityError::Config(format!(
                "bad API URL '{base_url}': not a base URL"
            )));
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static(headers::ACCEPT));

        let mut builder = reqwest::Client::builder()
            .user_agent(headers::USER_AGENT)
            .default_headers(default_headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        // Local servers are never reached through a proxy
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| ActivityError::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// URL of a user's events endpoint
    ///
    /// The username is encoded as a single path segment.
    pub fn events_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([endpoints::USERS, username, endpoints::EVENTS]);
        }
        url
    }

    /// Fetch a user's recent public events, in feed order
    pub async fn user_events(&self, username: &str) -> Result<Vec<RawEvent>, ActivityError> {
        let url = self.events_url(username);
        debug!(%url, "Requesting user events");

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        debug!(status = status.as_u16(), "Received response");

        if status == StatusCode::NOT_FOUND {
            return Err(ActivityError::NotFound {
                username: username.to_string(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ActivityError::Http {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let body = resp.text().await?;
        let events = parse_feed(&body)?;
        info!(username, count = events.len(), "Fetched user events");
        Ok(events)
    }
}

fn is_loopback(url: &Url) -> bool {
    url.host_str().is_some_and(|host| {
        host == "localhost"
            || host
                .trim_start_matches('[')
                .trim_end_matches(']')
                .parse::<IpAddr>()
                .is_ok_and(|ip| ip.is_loopback())
    })
}

/// Decode a response body into raw events
///
/// The body must be a JSON array. Elements are decoded leniently.
pub fn parse_feed(body: &str) -> Result<Vec<RawEvent>, ActivityError> {
    let values: Vec<Value> = serde_json::from_str(body)?;
    Ok(values.into_iter().map(RawEvent::from).collect())
}

/// Message for a failed response
///
/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
/// Falls back to the status' canonical reason.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| status.to_string())
}
