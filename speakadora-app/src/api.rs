//! Requests to the backend.

use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use speakadora::{UserProfile, UserStats};
use thiserror::Error;

/// Errors from fetching data from the backend.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be made or the body could not be decoded.
    #[error("Request failed: {0}")]
    Network(#[from] gloo::net::Error),
    /// The backend answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Fetches `url` and decodes the JSON body.
async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, FetchError> {
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(FetchError::Status {
            url,
            status: response.status(),
        });
    }
    Ok(response.json().await?)
}

/// Fetches aggregate usage statistics from `url`.
pub async fn fetch_stats(url: String) -> Result<UserStats, FetchError> {
    get_json(url).await
}

/// Fetches profile data from `url`.
pub async fn fetch_profile(url: String) -> Result<UserProfile, FetchError> {
    get_json(url).await
}
