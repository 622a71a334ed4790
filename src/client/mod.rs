//! HTTP client for the dataset API
//!
//! Mirrors the server operations and adds the `configure_dataset` workflow:
//! create the dataset when missing, refuse settings of another task, then
//! store the settings.

mod error;

pub use error::ClientError;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::api::middleware::API_KEY_HEADER;
use crate::api::types::{
    CreateDatasetApiRequest, DatasetResponse, DeleteDatasetResponse, ListDatasetsResponse,
    UserResponse,
};
use crate::config::DEFAULT_API_KEY;
use crate::domain::dataset::{DatasetName, Settings, TaskType};
use crate::domain::DomainError;

/// Connection settings for [`Client`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:6900".to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Dataset API client acting as the user owning `api_key`
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

fn dataset_name(name: &str) -> Result<DatasetName, ClientError> {
    DatasetName::new(name).map_err(|e| ClientError::InvalidInput(e.to_string()))
}

async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_response(status, &body))
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Same connection, acting as another user
    pub fn with_api_key(&self, api_key: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
    }

    /// Whether the server answers its liveness probe
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    /// The user behind the current API key
    pub async fn whoami(&self) -> Result<UserResponse, ClientError> {
        parse(self.request(reqwest::Method::GET, "/me").send().await?).await
    }

    pub async fn list_datasets(&self) -> Result<Vec<DatasetResponse>, ClientError> {
        let response: ListDatasetsResponse =
            parse(self.request(reqwest::Method::GET, "/datasets").send().await?).await?;
        Ok(response.datasets)
    }

    pub async fn create_dataset(
        &self,
        name: &str,
        task: TaskType,
    ) -> Result<DatasetResponse, ClientError> {
        let name = dataset_name(name)?;
        debug!(name = %name, task = %task, "Creating dataset");

        let body = CreateDatasetApiRequest {
            name: name.to_string(),
            task,
        };

        parse(
            self.request(reqwest::Method::POST, "/datasets")
                .json(&body)
                .send()
                .await?,
        )
        .await
    }

    /// Fetch a dataset, `None` when it does not exist
    pub async fn get_dataset(&self, name: &str) -> Result<Option<DatasetResponse>, ClientError> {
        let name = dataset_name(name)?;
        let path = format!("/datasets/{}", name);

        match parse(self.request(reqwest::Method::GET, &path).send().await?).await {
            Ok(dataset) => Ok(Some(dataset)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create the dataset if needed and store its settings
    ///
    /// Fails with [`ClientError::TaskMismatch`] before sending anything when
    /// the dataset already exists for a different task.
    pub async fn configure_dataset(
        &self,
        name: &str,
        settings: impl Into<Settings>,
    ) -> Result<DatasetResponse, ClientError> {
        let settings = settings.into();
        let name = dataset_name(name)?;

        let dataset = match self.get_dataset(name.as_str()).await? {
            Some(dataset) => dataset,
            None => match self.create_dataset(name.as_str(), settings.task()).await {
                Ok(dataset) => dataset,
                // Created concurrently by someone else
                Err(ClientError::AlreadyExists(_)) => self
                    .get_dataset(name.as_str())
                    .await?
                    .ok_or_else(|| ClientError::NotFound(format!("Dataset '{}' not found", name)))?,
                Err(e) => return Err(e),
            },
        };

        if dataset.task != settings.task() {
            let mismatch = DomainError::task_mismatch(name.as_str(), dataset.task, settings.task());
            return Err(ClientError::TaskMismatch(mismatch.to_string()));
        }

        info!(name = %name, task = %settings.task(), "Saving dataset settings");

        let path = format!("/datasets/{}/settings", name);
        parse(
            self.request(reqwest::Method::PUT, &path)
                .json(&settings)
                .send()
                .await?,
        )
        .await
    }

    /// Current settings of a dataset, `None` when never configured
    pub async fn load_settings(&self, name: &str) -> Result<Option<Settings>, ClientError> {
        let name = dataset_name(name)?;
        let path = format!("/datasets/{}/settings", name);

        parse(self.request(reqwest::Method::GET, &path).send().await?).await
    }

    /// Delete a dataset; `Ok(false)` when it did not exist
    pub async fn delete(&self, name: &str) -> Result<bool, ClientError> {
        let name = dataset_name(name)?;
        let path = format!("/datasets/{}", name);

        let response: DeleteDatasetResponse =
            parse(self.request(reqwest::Method::DELETE, &path).send().await?).await?;
        Ok(response.deleted)
    }
}
