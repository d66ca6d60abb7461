use std::{marker::PhantomData, time::Duration};

use async_trait::async_trait;
use serde_json::Value;

use super::collection::CollectionClient;
use crate::{
    constants::USER_AGENT,
    domain::entities::{CreateWire, Resource},
    errors::AdminError,
    settings::AppConfig,
};

/// `reqwest`-backed client for one resource collection of the portfolio
/// API.
pub struct HttpClient<T: Resource> {
    client: reqwest::Client,
    base_url: String,
    _resource: PhantomData<fn() -> T>,
}

/// Builds the `reqwest` client every resource client shares.
pub fn build_http_client(config: &AppConfig) -> Result<reqwest::Client, AdminError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(AdminError::from)
}

impl<T: Resource> HttpClient<T> {
    pub fn new(config: &AppConfig) -> Result<Self, AdminError> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config.base_url().to_string()))
    }

    /// Reuses an existing [`reqwest::Client`] so all resource clients can
    /// share one connection pool.
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        HttpClient {
            client,
            base_url,
            _resource: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, T::PATH)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, T::PATH, id)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, AdminError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(AdminError::Status {
                status: status.as_u16(),
                path: response.url().path().to_string(),
            })
        }
    }
}

/// Defensively unwraps a list response. The API sometimes wraps the
/// collection in a `{"data": [...]}` envelope and sometimes returns the
/// raw array; anything else counts as an empty collection.
fn unwrap_collection(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Peels a single created record out of a create response, which may be
/// the record, an enveloped record, or a one-element array.
fn unwrap_record(body: Value) -> Value {
    match body {
        Value::Array(mut items) if !items.is_empty() => items.remove(0),
        Value::Object(mut map) if map.contains_key("data") => {
            unwrap_record(map.remove("data").unwrap_or(Value::Null))
        }
        other => other,
    }
}

#[async_trait]
impl<T: Resource> CollectionClient<T> for HttpClient<T> {
    async fn list(&self) -> Result<Vec<T>, AdminError> {
        let response = self.client.get(self.collection_url()).send().await?;
        let body: Value = Self::check(response).await?.json().await?;

        unwrap_collection(body)
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(AdminError::from))
            .collect()
    }

    async fn create(&self, record: T) -> Result<T, AdminError> {
        let request = self.client.post(self.collection_url());
        let request = match T::CREATE_WIRE {
            CreateWire::Record => request.json(&record),
            CreateWire::Array => request.json(&[&record]),
        };

        let response = Self::check(request.send().await?).await?;
        let body: Value = response.json().await.unwrap_or(Value::Null);

        // Prefer the server's echo (it carries the assigned id); fall back
        // to the submitted record if the body is not decodable.
        match serde_json::from_value(unwrap_record(body)) {
            Ok(created) => Ok(created),
            Err(_) => Ok(record),
        }
    }

    async fn create_batch(&self, records: Vec<T>) -> Result<(), AdminError> {
        let body = serde_json::json!({ T::BATCH_KEY: records });
        let response = self
            .client
            .post(self.collection_url())
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update(&self, id: String, record: T) -> Result<(), AdminError> {
        let response = self
            .client
            .put(self.record_url(&id))
            .json(&record)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn remove(&self, id: String) -> Result<(), AdminError> {
        let response = self.client.delete(self.record_url(&id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
