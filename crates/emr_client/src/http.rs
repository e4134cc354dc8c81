//! The request pipeline all resource operations share.
//!
//! ```text
//! operation (create / list / update / delete)
//!   │
//!   ▼
//! Client::request { method, path, body? }
//!   │  bearer token read from the provider at call time
//!   ▼
//! raw JSON  ──2xx──▶ decoded body (empty object if undecodable)
//!           ──else─▶ ClientError::Api { server message ?? default }
//! ```
//!
//! Transport failures, undecodable bodies and non-2xx statuses are all
//! funneled into `ClientError` here; resource modules only see
//! `Result<Value, ClientError>` and do shape normalization on top.

use crate::auth::TokenProvider;
use crate::error::{ClientError, Result};
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct Client {
    base: String,
    http: reqwest::Client,
    auth: Arc<dyn TokenProvider>,
}

impl Client {
    /// `base` is the API root, e.g. `http://host:8080/openmrs/ws/rest/v1`.
    pub fn new(base: &str, auth: impl TokenProvider + 'static) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            auth: Arc::new(auth),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// One best-effort round trip: no retry, no local timeout. Returns the
    /// status and the decoded body — an empty object when the body is empty
    /// or not JSON, so error extraction never fails on a bad body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(StatusCode, Value)> {
        let url = format!("{}{}", self.base, path);
        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(header::ACCEPT, "application/json");
        if let Some(tok) = self.auth.token() {
            req = req.bearer_auth(tok);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        debug!(%method, %url, "request");
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = resp.status();
        let json = resp.json::<Value>().await.unwrap_or_else(|_| json!({}));
        debug!(%status, %url, "response");
        Ok((status, json))
    }

    /// The shared pipeline: success body, or a normalized API error built
    /// with `default_err` when the server supplies no message.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        default_err: &str,
    ) -> Result<Value> {
        let (status, json) = self.send(method, path, body).await?;
        if status.is_success() {
            Ok(json)
        } else {
            let err = api_error(status, &json, default_err);
            warn!(%path, %err, "api error");
            Err(err)
        }
    }
}

/// Pick the error message by priority: top-level `message`, nested
/// `error.message`, else the operation default.
fn api_error(status: StatusCode, body: &Value, default: &str) -> ClientError {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| body.pointer("/error/message").and_then(Value::as_str))
        .unwrap_or(default)
        .to_string();
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Unwrap a list envelope: the body must carry a `results` sequence. Anything
/// else is a contract violation, not a recoverable condition.
pub(crate) fn decode_results<T: DeserializeOwned>(mut body: Value) -> Result<Vec<T>> {
    let results = body
        .get_mut("results")
        .filter(|r| r.is_array())
        .map(Value::take)
        .ok_or_else(ClientError::invalid_format)?;
    serde_json::from_value(results).map_err(|_| ClientError::invalid_format())
}

/// Decode a single-object body (create/update responses).
pub(crate) fn decode_one<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|_| ClientError::invalid_format())
}
