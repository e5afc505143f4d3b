use std::fmt::{self, Debug, Display};

use serde_json::Value;

/// Result for API calls from [`Device`](super::Device)
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Errors reported by the TV in the `error` field of a response
    Api(ApiError),
    /// Bad input caught before anything was sent
    Client(ClientError),
    /// The exchange with the TV did not complete, or completed with a non-200 status
    Transport(TransportError),
    /// A successful payload did not have the expected shape
    Validation(ValidationError),
}

impl Error {
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Error::Client(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// HTTP status code, if the TV answered with something other than 200
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(TransportError::Status { code, .. }) => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn not_a_setter<S: Into<String>>(method: S) -> Error {
        ClientError::NotASetter(method.into()).into()
    }

    pub(crate) fn invalid_version<S: Into<String>>(version: S) -> Error {
        ClientError::InvalidVersion(version.into()).into()
    }

    pub(crate) fn view(view: &'static str, source: serde_json::Error) -> Error {
        ValidationError::View { view, source }.into()
    }

    pub(crate) fn shape<S: Into<String>>(method: S, detail: &'static str) -> Error {
        ValidationError::Shape {
            method: method.into(),
            detail,
        }
        .into()
    }
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Self {
        Error::Api(e)
    }
}

impl From<ClientError> for Error {
    fn from(e: ClientError) -> Self {
        Error::Client(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        TransportError::Http(e).into()
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        TransportError::IO(e).into()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::Client(e) => write!(f, "{}", e),
            Self::Transport(e) => write!(f, "{}", e),
            Self::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(TransportError::Http(e)) => Some(e),
            Self::Transport(TransportError::IO(e)) => Some(e),
            Self::Validation(ValidationError::View { source, .. }) => Some(source),
            Self::Validation(ValidationError::Body(e)) => Some(e),
            _ => None,
        }
    }
}

/// Error returned by the TV
///
/// The TV answers failed calls with `{"error": [code, "message"]}`. The field is kept
/// as received; [`code()`](Self::code) and [`message()`](Self::message) read it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    raw: Value,
}

impl ApiError {
    pub(crate) fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Error code sent by the TV
    pub fn code(&self) -> Option<i64> {
        self.raw.get(0).and_then(Value::as_i64)
    }

    /// Error message sent by the TV
    pub fn message(&self) -> Option<&str> {
        self.raw.get(1).and_then(Value::as_str)
    }

    /// The `error` field exactly as the TV sent it
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self.code() {
            Some(code) => ApiErrorKind::from(code),
            None => ApiErrorKind::Unknown(-1),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(msg)) => write!(f, "TV returned error {}: {}", code, msg),
            (Some(code), None) => write!(f, "TV returned error {} ({})", code, self.kind()),
            _ => write!(f, "TV returned error: {}", self.raw),
        }
    }
}

/// Well known error codes of the IP control protocol
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApiErrorKind {
    /// Generic failure
    Any,
    /// Device timed out handling the request
    Timeout,
    /// A parameter was rejected
    IllegalArgument,
    /// Request was malformed
    IllegalRequest,
    /// Device is not in a state that accepts the request
    IllegalState,
    /// Method is not available on this service
    NoSuchMethod,
    /// Method exists but not in the requested version
    UnsupportedVersion,
    /// Operation is not supported by this model
    UnsupportedOperation,
    /// Pre-shared key missing or wrong
    Forbidden,
    /// Resource not found
    NotFound,
    /// Device side failure
    InternalServerError,
    /// Not implemented on this firmware
    NotImplemented,
    /// The display is turned off
    DisplayOff,
    /// Other codes from 40000 up, defined by the model
    DeviceSpecific(i64),
    #[doc(hidden)]
    Unknown(i64),
}

impl From<i64> for ApiErrorKind {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Any,
            2 => Self::Timeout,
            3 => Self::IllegalArgument,
            5 => Self::IllegalRequest,
            7 => Self::IllegalState,
            12 => Self::NoSuchMethod,
            14 => Self::UnsupportedVersion,
            15 => Self::UnsupportedOperation,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::InternalServerError,
            501 => Self::NotImplemented,
            40005 => Self::DisplayOff,
            40000..=49999 => Self::DeviceSpecific(code),
            other => Self::Unknown(other),
        }
    }
}

impl Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Timeout => write!(f, "Timeout"),
            Self::IllegalArgument => write!(f, "Illegal Argument"),
            Self::IllegalRequest => write!(f, "Illegal Request"),
            Self::IllegalState => write!(f, "Illegal State"),
            Self::NoSuchMethod => write!(f, "No Such Method"),
            Self::UnsupportedVersion => write!(f, "Unsupported Version"),
            Self::UnsupportedOperation => write!(f, "Unsupported Operation"),
            Self::Forbidden => write!(f, "Forbidden"),
            Self::NotFound => write!(f, "Not Found"),
            Self::InternalServerError => write!(f, "Internal Server Error"),
            Self::NotImplemented => write!(f, "Not Implemented"),
            Self::DisplayOff => write!(f, "Display Is Turned Off"),
            Self::DeviceSpecific(code) => write!(f, "Device specific error {}", code),
            Self::Unknown(code) => write!(f, "Unknown error code {}", code),
        }
    }
}

/// Invalid input from the caller
#[derive(Debug)]
pub enum ClientError {
    /// Method name was empty
    EmptyMethod,
    /// Version is not of the form `major.minor`
    InvalidVersion(String),
    /// A non-`set` method was sent down the mutating path
    NotASetter(String),
    /// Endpoint has no host
    MissingHost,
    /// Pre-shared key cannot be sent as an HTTP header
    InvalidPreSharedKey,
    #[doc(hidden)]
    Message(String),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            Self::EmptyMethod => write!(f, "Method name must not be empty"),
            Self::InvalidVersion(v) => {
                write!(f, "Invalid protocol version '{}', expected e.g. '1.0'", v)
            }
            Self::NotASetter(method) => write!(
                f,
                "Method '{}' cannot be sent as a setting change, it does not start with 'set'",
                method
            ),
            Self::MissingHost => write!(f, "No host configured for the TV"),
            Self::InvalidPreSharedKey => {
                write!(f, "Pre-shared key contains characters not allowed in a header")
            }
            Self::Message(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug)]
pub enum TransportError {
    /// HTTP client failure (connection refused, timeout, dns)
    Http(reqwest::Error),
    /// I/O failure from a custom [`Transport`](crate::Transport)
    IO(std::io::Error),
    /// TV answered with a status other than 200
    Status { code: u16, error: Option<Value> },
}

impl Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "{}", e),
            Self::IO(e) => write!(f, "{}", e),
            Self::Status {
                code,
                error: Some(error),
            } => write!(f, "TV answered with HTTP {}: {}", code, error),
            Self::Status { code, error: None } => write!(f, "TV answered with HTTP {}", code),
        }
    }
}

#[derive(Debug)]
pub enum ValidationError {
    /// A typed view could not be built from the result
    View {
        view: &'static str,
        source: serde_json::Error,
    },
    /// The result did not have the element or nesting a method expects
    Shape { method: String, detail: &'static str },
    /// The response body was not a JSON object
    Body(serde_json::Error),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View { view, source } => write!(f, "Could not read {}: {}", view, source),
            Self::Shape { method, detail } => {
                write!(f, "Unexpected result for '{}': {}", method, detail)
            }
            Self::Body(e) => write!(f, "Response body is not valid JSON: {}", e),
        }
    }
}
