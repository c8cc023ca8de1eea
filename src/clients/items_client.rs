use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::models::{Item, NewItem};

/// A backend answer: the status code, plus the decoded body when the
/// status was a success.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub body: Option<T>,
}

impl<T> Reply<T> {
    pub fn new(status: StatusCode, body: Option<T>) -> Self {
        Self { status, body }
    }

    pub fn status(status: StatusCode) -> Self {
        Self { status, body: None }
    }
}

/// Failure to get any status code out of the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Connection refused, timeout, or any other transport failure
    Transport(String),
    /// A success status whose body could not be decoded
    Decode(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::Transport(e) => write!(f, "{}", e),
            BackendError::Decode(e) => write!(f, "invalid response body: {}", e),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            BackendError::Decode(e.to_string())
        } else {
            BackendError::Transport(e.to_string())
        }
    }
}

/// The item storage API as seen by the request handlers
#[async_trait]
pub trait ItemsBackend: Send + Sync {
    /// GET /items
    async fn list_items(&self) -> Result<Reply<Vec<Item>>, BackendError>;
    /// GET /items/{id}
    async fn get_item(&self, id: i64) -> Result<Reply<Item>, BackendError>;
    /// POST /items
    async fn create_item(&self, item: &NewItem) -> Result<Reply<Item>, BackendError>;
    /// PUT /items/{id}
    async fn update_item(&self, id: i64, item: &NewItem) -> Result<Reply<()>, BackendError>;
    /// DELETE /items/{id}
    async fn delete_item(&self, id: i64) -> Result<Reply<()>, BackendError>;
}

#[derive(Debug)]
pub struct ItemsClient {
    client: Client,
    base_url: String,
}

impl ItemsClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/items/{}", self.base_url, id)
    }
}

/// Decode the body only for the statuses the caller treats as success
async fn read_reply<T: DeserializeOwned>(
    response: reqwest::Response,
    success: &[StatusCode],
) -> Result<Reply<T>, BackendError> {
    let status = response.status();
    debug!("Backend answered {} for {}", status, response.url());
    if success.contains(&status) {
        let body = response.json::<T>().await?;
        Ok(Reply::new(status, Some(body)))
    } else {
        Ok(Reply::status(status))
    }
}

/// For calls whose success carries nothing the caller needs
fn read_status(response: reqwest::Response) -> Reply<()> {
    debug!("Backend answered {} for {}", response.status(), response.url());
    Reply::status(response.status())
}

#[async_trait]
impl ItemsBackend for ItemsClient {
    async fn list_items(&self) -> Result<Reply<Vec<Item>>, BackendError> {
        let response = self.client.get(self.items_url()).send().await?;
        read_reply(response, &[StatusCode::OK]).await
    }

    async fn get_item(&self, id: i64) -> Result<Reply<Item>, BackendError> {
        let response = self.client.get(self.item_url(id)).send().await?;
        read_reply(response, &[StatusCode::OK]).await
    }

    async fn create_item(&self, item: &NewItem) -> Result<Reply<Item>, BackendError> {
        let response = self.client.post(self.items_url()).json(item).send().await?;
        read_reply(response, &[StatusCode::OK, StatusCode::CREATED]).await
    }

    async fn update_item(&self, id: i64, item: &NewItem) -> Result<Reply<()>, BackendError> {
        let response = self.client.put(self.item_url(id)).json(item).send().await?;
        Ok(read_status(response))
    }

    async fn delete_item(&self, id: i64) -> Result<Reply<()>, BackendError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Ok(read_status(response))
    }
}
