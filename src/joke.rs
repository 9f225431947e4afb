//! HTTP client for the programming-joke API.
//!
//! One GET against a configured endpoint that returns a JSON array of jokes;
//! only the first element is used. Every failure mode maps to a
//! [`JokeError`] variant so the dispatcher can substitute its fallback
//! message; nothing here ever reaches the user directly.

use serde::Deserialize;
use thiserror::Error;

/// Joke fetch errors.
#[derive(Debug, Error)]
pub enum JokeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("joke API returned an empty or malformed response")]
    Malformed,
}

/// One joke as the API serves it. Extra fields (`id`, `type`) are ignored.
#[derive(Debug, Deserialize)]
struct Joke {
    setup: String,
    punchline: String,
}

/// Client for the joke endpoint.
#[derive(Debug, Clone)]
pub struct JokeClient {
    endpoint: String,
    client: reqwest::Client,
}

impl JokeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch one joke, formatted as `setup\npunchline`.
    pub async fn fetch(&self) -> Result<String, JokeError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let jokes: Vec<Joke> = response.json().await?;
        let joke = jokes.into_iter().next().ok_or(JokeError::Malformed)?;
        Ok(format!("{}\n{}", joke.setup, joke.punchline))
    }
}
