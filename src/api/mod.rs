// ABOUTME: HTTP client for the construction backend REST API.
// ABOUTME: JSON in and out; any non-2xx status becomes an "API error: <code>" failure.

mod endpoints;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

const JSON: &str = "application/json";

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the backend origin, e.g. `http://localhost:8000`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.client.get(self.url(path)).header(CONTENT_TYPE, JSON);
        let response = self.send(request, path).await?;
        Self::decode(response, path).await
    }

    /// POST with an optional JSON body and decode the JSON response
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path));
        let request = match body {
            Some(body) => request.json(body),
            None => request.header(CONTENT_TYPE, JSON),
        };
        let response = self.send(request, path).await?;
        Self::decode(response, path).await
    }

    /// POST an action whose response body the caller does not need
    pub async fn post_action(&self, path: &str) -> Result<()> {
        let request = self.client.post(self.url(path)).header(CONTENT_TYPE, JSON);
        self.send(request, path).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<reqwest::Response> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%path, status = status.as_u16(), "Backend returned error status");
            anyhow::bail!("API error: {}", status.as_u16());
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, path: &str) -> Result<T> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).with_context(|| format!("Invalid JSON from {}", path))
    }
}
