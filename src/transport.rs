use super::constants::{DEFAULT_TIMEOUT, PSK_HEADER};
use super::error::{ApiError, Result, TransportError, ValidationError};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use std::fmt::Debug;
use std::time::Duration;

/// An HTTP POST ready to go out
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// Serialized [`Envelope`](crate::Envelope)
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of whatever the TV answered
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Moves one request to the TV and back
///
/// Returning `Err` means the exchange itself failed. Any HTTP answer, whatever its status,
/// is an `Ok`.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .danger_accept_invalid_certs(true)
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .post(&request.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request.body);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }

        let res = builder.send().await?;
        let status = res.status().as_u16();
        let body = res.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

pub(crate) fn auth_headers(pre_shared_key: Option<&str>) -> Vec<(&'static str, String)> {
    pre_shared_key
        .map(|key| vec![(PSK_HEADER, key.to_string())])
        .unwrap_or_default()
}

/// Turn an HTTP answer into the `result` array or an error
///
/// Non-200 is a transport error, a non-empty `error` field is an [`ApiError`],
/// anything else yields `result` (empty if absent).
pub fn unwrap_result(response: HttpResponse) -> Result<Vec<Value>> {
    if response.status != 200 {
        let error = serde_json::from_slice::<Value>(&response.body)
            .ok()
            .and_then(|mut body| body.get_mut("error").map(Value::take))
            .filter(|e| !is_empty(e));
        log::debug!("HTTP {} from TV", response.status);
        return Err(TransportError::Status {
            code: response.status,
            error,
        }
        .into());
    }

    let mut body: Value = serde_json::from_slice(&response.body).map_err(ValidationError::Body)?;
    if !body.is_object() {
        return Err(ValidationError::Body(serde::de::Error::custom(
            "expected a JSON object",
        ))
        .into());
    }

    match body.get_mut("error").map(Value::take) {
        Some(error) if !is_empty(&error) => {
            log::warn!("TV returned error {}", error);
            return Err(ApiError::new(error).into());
        }
        _ => {}
    }

    match body.get_mut("result").map(Value::take) {
        Some(Value::Array(result)) => Ok(result),
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(_) => Err(ValidationError::Body(serde::de::Error::custom(
            "`result` is not an array",
        ))
        .into()),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(v) => v.is_empty(),
        Value::Object(m) => m.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
