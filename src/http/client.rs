//! Endpoint base: `OandaHttp`.
//!
//! Renders a route against the base URL, attaches the bearer token, sends the
//! request fields through the [`Transport`], checks the status and parses the
//! body. Returns wire types; conversion to domain types happens in the
//! per-domain sub-clients.

use crate::error::{HttpError, SdkError};
use crate::http::fields::Fields;
use crate::http::route::render_route;
use crate::http::transport::{HttpRequest, Method, ReqwestTransport, Transport};

use serde::de::DeserializeOwned;

/// Low-level HTTP client for the OANDA REST API.
#[derive(Clone)]
pub struct OandaHttp<T = ReqwestTransport> {
    base_url: String,
    /// Bearer token. Never logged, never printed by `Debug`.
    api_key: String,
    transport: T,
}

impl<T> std::fmt::Debug for OandaHttp<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OandaHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl<T: Transport> OandaHttp<T> {
    pub fn new(base_url: &str, api_key: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        route: &str,
        route_params: &[(&str, &str)],
        fields: Fields,
    ) -> Result<R, SdkError> {
        self.request(Method::Get, route, route_params, fields).await
    }

    pub async fn post<R: DeserializeOwned>(
        &self,
        route: &str,
        route_params: &[(&str, &str)],
        fields: Fields,
    ) -> Result<R, SdkError> {
        self.request(Method::Post, route, route_params, fields).await
    }

    pub async fn patch<R: DeserializeOwned>(
        &self,
        route: &str,
        route_params: &[(&str, &str)],
        fields: Fields,
    ) -> Result<R, SdkError> {
        self.request(Method::Patch, route, route_params, fields).await
    }

    pub async fn delete<R: DeserializeOwned>(
        &self,
        route: &str,
        route_params: &[(&str, &str)],
        fields: Fields,
    ) -> Result<R, SdkError> {
        self.request(Method::Delete, route, route_params, fields).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        route: &str,
        route_params: &[(&str, &str)],
        fields: Fields,
    ) -> Result<R, SdkError> {
        let url = format!("{}{}", self.base_url, render_route(route, route_params)?);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let request = HttpRequest {
            method,
            url,
            headers: vec![(
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key),
            )],
            fields,
        };

        let resp = self.transport.send(request).await?;
        tracing::debug!(status = resp.status, "Received response");

        if !resp.is_success() {
            tracing::warn!(status = resp.status, "Request to {} failed", route);
            return Err(HttpError::Remote {
                status: resp.status,
                body: resp.body,
            }
            .into());
        }

        Ok(serde_json::from_str(&resp.body)?)
    }
}
