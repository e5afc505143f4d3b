//! Client for the IP control API of Sony Bravia TVs.
//!
//! The TV speaks a JSON-RPC flavoured protocol over HTTP: every call is a POST of
//! `{"method", "id", "params", "version"}` to `http://<ip>/sony/<service>`, answered with
//! either `{"result": [..]}` or `{"error": [code, message]}`. [`Device`] wraps this and exposes
//! the TV's subsystems as small facades.
//!
//! IP control and, optionally, a pre-shared key have to be enabled on the TV under
//! *Network > Home network setup > IP control*.

mod constants;
mod device;
mod endpoint;
mod envelope;
mod error;
mod transport;

pub use constants::{DEFAULT_TIMEOUT, PSK_HEADER};
pub use device::{
    AppControl, AppInfo, AudioControl, AvContent, Device, InterfaceInfo, LedIndicator, LedMode,
    NetworkInfo, Outcome, PictureSetting, Power, PowerSavingMode, PowerSavingStatus, PowerState,
    PowerStatus, Response, SupportedFunction, System, SystemInfo, Video, VolumeInfo, WolMode,
};
pub use endpoint::Endpoint;
pub use envelope::{transaction_id, Envelope, Method, Service};
pub use error::{
    ApiError, ApiErrorKind, ClientError, Error, Result, TransportError, ValidationError,
};
pub use transport::{unwrap_result, HttpRequest, HttpResponse, HttpTransport, Transport};
