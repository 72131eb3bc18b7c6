use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::photos::{Photo, PhotoPage};
use crate::domain::selection::Selection;

/// Public Mars Photos endpoint. Rover name is appended as a path segment.
pub const MARS_API_URL: &str = "https://api.nasa.gov/mars-photos/api/v1/rovers";

const USER_AGENT: &str = "Roverpic/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures fetching one batch of photos. All variants are recovered locally
/// by the roulette loop (logged, then retried with a fresh selection); none
/// reach the user.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("photo request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("photo service returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("malformed photo response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Seam between the roulette loop and the upstream photo API, so the loop can
/// be tested against an in-memory source.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Fetch every photo matching the selection.
    async fn photos(&self, selection: &Selection) -> Result<Vec<Photo>, SourceError>;
}

/// `PhotoSource` backed by the Mars Photos REST API.
pub struct MarsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MarsApiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl PhotoSource for MarsApiClient {
    async fn photos(&self, selection: &Selection) -> Result<Vec<Photo>, SourceError> {
        let url = format!("{}/{}/photos", self.base_url, selection.rover);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("sol", selection.sol.to_string()),
                ("camera", selection.camera.to_string()),
                ("api_key", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status(),
            });
        }

        // Decode via text so an unexpected body shape maps to
        // MalformedResponse rather than a transport error.
        let body = response.text().await?;
        let page: PhotoPage = serde_json::from_str(&body)?;

        Ok(page.photos)
    }
}
