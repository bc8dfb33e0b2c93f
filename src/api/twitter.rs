//! # Twitter API Client
//!
//! Client for the Twitter v2 recent-search endpoint. Requests recent
//! English-language, non-retweet posts matching a search term, text field
//! only, capped at one page of results.

use crate::config::Credentials;
use crate::data::Post;
use crate::defaults;
use super::PostSource;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Twitter API base URL
const TWITTER_BASE_URL: &str = "https://api.twitter.com/2";

/// Request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when using the Twitter API
#[derive(Error, Debug)]
pub enum TwitterError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {message} (status: {status})")]
    ApiError { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Recent-search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Absent entirely when the search matches nothing
    data: Option<Vec<TweetItem>>,
}

#[derive(Debug, Deserialize)]
struct TweetItem {
    id: String,
    text: String,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    title: Option<String>,
    detail: Option<String>,
}

/// Twitter v2 API client
pub struct TwitterClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

impl TwitterClient {
    /// Create a new client from loaded credentials
    pub fn new(credentials: Credentials) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            credentials,
            base_url: TWITTER_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (tests against a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the recent-search query string for a term
    ///
    /// English-language posts only, retweets excluded.
    fn build_query(term: &str) -> String {
        format!("{} lang:en -is:retweet", term)
    }

    /// Fetch one page of recent posts matching `term`
    ///
    /// Returns an empty vector when the search matches nothing; the caller
    /// decides how to surface that.
    pub async fn search_recent_posts(&self, term: &str) -> Result<Vec<Post>, TwitterError> {
        let url = format!("{}/tweets/search/recent", self.base_url);
        let query = Self::build_query(term);
        let max_results = defaults::MAX_RESULTS.to_string();

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.credentials.bearer_token)
            .query(&[
                ("query", query.as_str()),
                ("max_results", max_results.as_str()),
                ("tweet.fields", "text"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => {
                    let title = body.title.unwrap_or_else(|| "unknown error".to_string());
                    match body.detail {
                        Some(detail) => format!("{}: {}", title, detail),
                        None => title,
                    }
                }
                Err(_) => "unparseable error body".to_string(),
            };
            return Err(TwitterError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| TwitterError::InvalidResponse(e.to_string()))?;

        let posts = search
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|item| Post::new(item.id, item.text))
            .collect();

        Ok(posts)
    }
}

#[async_trait]
impl PostSource for TwitterClient {
    async fn search_recent(&self, term: &str) -> Result<Vec<Post>, TwitterError> {
        self.search_recent_posts(term).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query() {
        assert_eq!(
            TwitterClient::build_query("acme cola"),
            "acme cola lang:en -is:retweet"
        );
    }

    #[test]
    fn test_search_response_without_data() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"meta":{"result_count":0}}"#).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn test_search_response_with_data() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{"data":[{"id":"1","text":"great product"}],"meta":{"result_count":1}}"#,
        )
        .unwrap();
        let data = parsed.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].text, "great product");
    }
}
