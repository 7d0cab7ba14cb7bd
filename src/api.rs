//! API client for the TVmaze show metadata service.
//!
//! This module defines the [`DataSource`] seam the browser fetches through,
//! and its HTTP implementation [`TvMazeClient`].

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::types::{Episode, Show, ShowId};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Base delay between retries in milliseconds (doubles each retry).
const BASE_RETRY_DELAY_MS: u64 = 500;

const USER_AGENT: &str = concat!("show-browser/", env!("CARGO_PKG_VERSION"));

/// Where shows and episodes come from.
pub trait DataSource {
    /// `GET {base}/shows`
    fn fetch_shows(&self) -> impl Future<Output = Result<Vec<Show>>>;

    /// `GET {base}/shows/{id}/episodes`
    fn fetch_episodes(&self, show_id: ShowId) -> impl Future<Output = Result<Vec<Episode>>>;
}

/// Retry an async operation with exponential backoff.
///
/// Only transient errors (network trouble, 5xx) are retried, up to
/// `max_retries` extra attempts. With `max_retries == 0` the first error is
/// returned as is.
///
/// # Arguments
///
/// * `operation_name` - Name of the operation for log messages
/// * `max_retries` - Extra attempts after the first one
/// * `f` - Async function to retry
async fn retry_with_backoff<T, F, Fut>(operation_name: &str, max_retries: u32, f: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;

    loop {
        match f().await {
            Ok(result) => {
                if attempt > 0 {
                    info!(
                        "{} succeeded after {} attempts",
                        operation_name,
                        attempt + 1
                    );
                }
                return Ok(result);
            }
            Err(e) if attempt < max_retries && e.is_transient() => {
                let delay = Duration::from_millis(BASE_RETRY_DELAY_MS * 2_u64.pow(attempt));
                warn!(
                    "{} failed (attempt {}/{}): {}. Retrying in {:?}...",
                    operation_name,
                    attempt + 1,
                    max_retries + 1,
                    e,
                    delay
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                warn!("{} failed: {}", operation_name, e);
                return Err(e);
            }
        }
    }
}

/// HTTP client for the TVmaze REST API.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
    retries: u32,
}

impl TvMazeClient {
    /// Build a client for `base_url`.
    ///
    /// No timeout is applied unless `timeout` is given.
    pub fn new(base_url: &str, timeout: Option<Duration>, retries: u32) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, base_url, retries))
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: &str, retries: u32) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retries,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, config.request_timeout(), config.retries)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the show list endpoint.
    pub fn shows_url(&self) -> String {
        format!("{}/shows", self.base_url)
    }

    /// URL of the episode list endpoint for `show_id`.
    pub fn episodes_url(&self, show_id: ShowId) -> String {
        format!("{}/shows/{}/episodes", self.base_url, show_id)
    }

    /// GET `url` and decode a JSON body, mapping non-2xx to [`AppError::Http`].
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Http(status.as_u16()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| AppError::Parse(format!("{}: {}", url, e)))
    }
}

impl DataSource for TvMazeClient {
    async fn fetch_shows(&self) -> Result<Vec<Show>> {
        let url = self.shows_url();
        let shows: Vec<Show> =
            retry_with_backoff("Fetch shows", self.retries, || self.get_json(&url)).await?;

        debug!("Fetched {} shows", shows.len());
        Ok(shows)
    }

    async fn fetch_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>> {
        let url = self.episodes_url(show_id);
        let episodes: Vec<Episode> = retry_with_backoff(
            &format!("Fetch episodes for show {}", show_id),
            self.retries,
            || self.get_json(&url),
        )
        .await?;

        debug!("Fetched {} episodes for show {}", episodes.len(), show_id);
        Ok(episodes)
    }
}
