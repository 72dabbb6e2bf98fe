//! HTTP access to the marketplace backend.
//!
//! Every request carries the caller's bearer token from a [`RequestContext`].
//! Response bodies are decoded with `serde_json` so decoding failures surface
//! as [`DepotError::Json`] rather than transport errors.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::{DepotError, Result};

/// Thin JSON client over the backend REST API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    timeout: Duration,
    http: Client,
}

impl BackendClient {
    /// Create a client for `base_url`.
    ///
    /// Fails with [`DepotError::InvalidArgument`] if the URL does not parse.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        reqwest::Url::parse(trimmed).map_err(|e| {
            DepotError::InvalidArgument(format!("Invalid base URL '{}': {}", base_url, e))
        })?;
        let http = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: trimmed.to_string(),
            timeout,
            http,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        tracing::debug!(method = method.as_str(), path, role = ?ctx.role, "backend request");
        let mut req = self
            .http
            .request(method, self.url(path))
            .bearer_auth(&ctx.token);
        if let Some(body) = body {
            req = req.json(body);
        }
        Ok(req.send().await?)
    }

    /// GET `path` and decode the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, ctx: &RequestContext, path: &str) -> Result<T> {
        let resp = self
            .send(ctx, Method::GET, path, None)
            .await?
            .error_for_status()?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET `path`, mapping a 404 to `None`.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<Option<T>> {
        let resp = self.send(ctx, Method::GET, path, None).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let bytes = resp.error_for_status()?.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// PATCH `path` with `body` and decode the updated resource.
    pub async fn patch_json<B, T>(&self, ctx: &RequestContext, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let resp = self
            .send(ctx, Method::PATCH, path, Some(&body))
            .await?
            .error_for_status()?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
