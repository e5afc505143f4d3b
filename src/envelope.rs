use super::constants::*;
use super::error::{ClientError, Error, Result};

use rand::Rng;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use std::fmt::{self, Display};
use std::sync::OnceLock;

/// Path segment selecting a subsystem of the TV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Guide,
    System,
    AppControl,
    Audio,
    AvContent,
    Video,
    VideoScreen,
    Encryption,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::System => "system",
            Self::AppControl => "appControl",
            Self::Audio => "audio",
            Self::AvContent => "avContent",
            Self::Video => "video",
            Self::VideoScreen => "videoScreen",
            Self::Encryption => "encryption",
        }
    }

    /// Every service that `getSupportedApiInfo` reports on
    pub fn all() -> [Service; 7] {
        [
            Self::AppControl,
            Self::Audio,
            Self::AvContent,
            Self::Encryption,
            Self::System,
            Self::Video,
            Self::VideoScreen,
        ]
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A protocol method: where it lives, what it is called and which version to ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method {
    pub service: Service,
    pub name: &'static str,
    pub version: &'static str,
}

impl Method {
    pub const fn new(service: Service, name: &'static str, version: &'static str) -> Self {
        Self {
            service,
            name,
            version,
        }
    }

    /// Methods that may go down the mutating path
    pub fn is_setter(&self) -> bool {
        self.name.starts_with("set")
    }

    pub(crate) fn envelope(&self, params: Vec<Value>) -> Result<Envelope> {
        Envelope::build(self.name, params, self.version)
    }
}

/// Request body sent to the TV
///
/// Serializes as `{"method": .., "id": .., "params": [..], "version": ".."}`, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    method: String,
    id: u32,
    params: Vec<Value>,
    version: String,
}

impl Envelope {
    /// Build an envelope with a fresh transaction id
    pub fn build<S: Into<String>>(method: S, params: Vec<Value>, version: &str) -> Result<Self> {
        Self::build_with(&mut rand::thread_rng(), method, params, version)
    }

    /// Same as [`build()`](Self::build) but drawing the id from `rng`
    pub fn build_with<R, S>(rng: &mut R, method: S, params: Vec<Value>, version: &str) -> Result<Self>
    where
        R: Rng + ?Sized,
        S: Into<String>,
    {
        let method = method.into();
        if method.is_empty() {
            return Err(ClientError::EmptyMethod.into());
        }
        if !version_pattern().is_match(version) {
            return Err(Error::invalid_version(version));
        }

        let envelope = Self {
            method,
            id: transaction_id(rng),
            params,
            version: version.into(),
        };
        log::trace!("Built envelope {} id={}", envelope.method, envelope.id);
        Ok(envelope)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Random transaction id in `1..=2147483647`
pub fn transaction_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(TRANSACTION_ID_MIN..=TRANSACTION_ID_MAX)
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+\.\d+$").expect("version pattern is valid"))
}
