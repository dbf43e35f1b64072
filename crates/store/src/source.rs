//! The injected fetch capability and its REST implementation.

use async_trait::async_trait;
use stockboard_core::{Hospital, Tag};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Fetches the current hospital and tag collections.
///
/// This is a capability, not ambient state: the store receives one at
/// construction, which keeps the whole client layer testable with a stub.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_hospitals(&self) -> StoreResult<Vec<Hospital>>;
    async fn fetch_tags(&self) -> StoreResult<Vec<Tag>>;
}

/// `DataSource` backed by the stockboard REST API.
#[derive(Clone, Debug)]
pub struct RestDataSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestDataSource {
    /// A source reading from `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> StoreResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(value)
    }
}

#[async_trait]
impl DataSource for RestDataSource {
    async fn fetch_hospitals(&self) -> StoreResult<Vec<Hospital>> {
        self.get_json("/hospitals").await
    }

    async fn fetch_tags(&self) -> StoreResult<Vec<Tag>> {
        self.get_json("/tags").await
    }
}
