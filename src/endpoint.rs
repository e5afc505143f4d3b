use super::constants::*;
use super::error::{ClientError, Result};

use reqwest::header::HeaderValue;
use serde::{Deserialize, Deserializer};

use std::env;
use std::fmt;

/// Where to reach a TV
///
/// Can be deserialized from a config file, where `scheme` and `base` may be left out:
///
/// ```
/// # fn example() -> Result<(), serde_json::Error> {
/// let endpoint: bravia::Endpoint = serde_json::from_str(
///     r#"{"host": "192.168.1.25", "pre_shared_key": "meseeks"}"#,
/// )?;
/// assert_eq!(endpoint.url("system"), "http://192.168.1.25/sony/system");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Deserialize)]
pub struct Endpoint {
    #[serde(default = "default_scheme")]
    scheme: String,
    host: String,
    #[serde(default = "default_base")]
    base: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pre_shared_key: Option<String>,
}

impl Endpoint {
    /// Endpoint for a TV at `host` using `http` and the `/sony` base path
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            scheme: DEFAULT_SCHEME.into(),
            host: host.into(),
            base: DEFAULT_BASE.into(),
            pre_shared_key: None,
        }
    }

    /// Read the endpoint from `BRAVIA_HOST`, `BRAVIA_SCHEME`, `BRAVIA_BASE` and `BRAVIA_PSK`.
    /// Only the host is required.
    pub fn from_env() -> Result<Self> {
        let host = env::var(ENV_HOST)
            .ok()
            .filter(|h| !h.is_empty())
            .ok_or(ClientError::MissingHost)?;

        let mut endpoint = Self::new(host);
        if let Ok(scheme) = env::var(ENV_SCHEME) {
            endpoint = endpoint.with_scheme(scheme);
        }
        if let Ok(base) = env::var(ENV_BASE) {
            endpoint = endpoint.with_base(base);
        }
        if let Ok(psk) = env::var(ENV_PSK) {
            endpoint = endpoint.with_pre_shared_key(psk);
        }
        Ok(endpoint)
    }

    pub fn with_scheme<S: Into<String>>(mut self, scheme: S) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_base<S: Into<String>>(mut self, base: S) -> Self {
        self.base = base.into();
        self
    }

    /// Pre-shared key set under the TV's IP control settings. An empty key is ignored.
    pub fn with_pre_shared_key<S: Into<String>>(mut self, key: S) -> Self {
        self.pre_shared_key = Some(key.into()).filter(|k| !k.is_empty());
        self
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn pre_shared_key(&self) -> Option<&str> {
        self.pre_shared_key.as_deref()
    }

    /// Full url of a service, e.g. `http://192.168.1.25/sony/system`
    pub fn url(&self, service: &str) -> String {
        format!(
            "{}://{}{}/{}",
            self.scheme,
            self.host,
            self.base.trim_end_matches('/'),
            service
        )
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ClientError::MissingHost.into());
        }
        if let Some(key) = &self.pre_shared_key {
            HeaderValue::from_str(key).map_err(|_| ClientError::InvalidPreSharedKey)?;
        }
        Ok(())
    }
}

// Keep the key out of logs
impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Endpoint");
        d.field("scheme", &self.scheme);
        d.field("host", &self.host);
        d.field("base", &self.base);
        d.field(
            "pre_shared_key",
            &self.pre_shared_key.as_ref().map(|_| "<redacted>"),
        );
        d.finish()
    }
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.into()
}

fn default_base() -> String {
    DEFAULT_BASE.into()
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|k| !k.is_empty()))
}
