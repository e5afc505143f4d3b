use super::endpoint::Endpoint;
use super::envelope::{Envelope, Method, Service};
use super::error::{ClientError, Error, Result};
use super::transport::{self, HttpRequest, HttpTransport, Transport};

mod app_control;
mod audio;
mod av_content;
mod info;
mod power;
mod response;
mod system;
mod video;

pub use self::app_control::AppControl;
pub use self::audio::AudioControl;
pub use self::av_content::AvContent;
pub use self::info::{
    AppInfo, InterfaceInfo, LedIndicator, LedMode, NetworkInfo, PowerSavingMode,
    PowerSavingStatus, PowerState, PowerStatus, SupportedFunction, SystemInfo, VolumeInfo,
    WolMode,
};
pub use self::power::Power;
pub use self::response::{Outcome, Response};
pub use self::system::System;
pub use self::video::{PictureSetting, Video};

use serde_json::{json, Value};

use std::sync::Arc;
use std::time::Duration;

const GET_SUPPORTED_API_INFO: Method =
    Method::new(Service::Guide, "getSupportedApiInfo", "1.0");

/// A Bravia TV
///
/// More specifically, a client for one TV reachable at an [`Endpoint`]. Every call is a single
/// request and response; nothing is cached or retried. Subsystems are reached through
/// [`system()`](Self::system), [`power()`](Self::power), [`app_control()`](Self::app_control),
/// [`audio()`](Self::audio), [`av_content()`](Self::av_content) and [`video()`](Self::video).
///
/// Cloning `Device` is cheap and clones may be used from several tasks at once.
///
/// # Example
///
/// ```
/// # use bravia::{Device, Endpoint};
/// #
/// # async fn power_on() -> Result<(), bravia::Error> {
/// let endpoint = Endpoint::new("192.168.1.25").with_pre_shared_key("meseeks");
/// let tv = Device::new(endpoint)?;
///
/// if !tv.power().is_powered_on().await? {
///     tv.power().power_on().await?;
/// }
/// println!("{}", tv.system().information().await?.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Device {
    inner: Arc<DeviceRef>,
}

impl Device {
    /// Client for the TV at `endpoint`, talking HTTP through `reqwest`
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        Self::with_transport(endpoint, HttpTransport::new()?)
    }

    /// Same as [`new()`](Self::new) with a custom request timeout
    pub fn with_timeout(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        Self::with_transport(endpoint, HttpTransport::with_timeout(timeout)?)
    }

    /// Client sending its requests through `transport`
    pub fn with_transport<T>(endpoint: Endpoint, transport: T) -> Result<Self>
    where
        T: Transport + 'static,
    {
        endpoint.validate()?;
        Ok(Self {
            inner: Arc::new(DeviceRef {
                endpoint,
                transport: Box::new(transport),
            }),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.inner.endpoint
    }

    pub fn system(&self) -> System<'_> {
        System::new(self)
    }

    pub fn power(&self) -> Power<'_> {
        Power::new(self)
    }

    pub fn app_control(&self) -> AppControl<'_> {
        AppControl::new(self)
    }

    pub fn audio(&self) -> AudioControl<'_> {
        AudioControl::new(self)
    }

    pub fn av_content(&self) -> AvContent<'_> {
        AvContent::new(self)
    }

    pub fn video(&self) -> Video<'_> {
        Video::new(self)
    }

    /// Services and methods the TV supports
    ///
    /// With an empty slice every service is listed.
    pub async fn api_info(&self, services: &[Service]) -> Result<Response> {
        let services: Vec<&str> = if services.is_empty() {
            Service::all().iter().map(Service::as_str).collect()
        } else {
            services.iter().map(Service::as_str).collect()
        };
        self.call(&GET_SUPPORTED_API_INFO, vec![json!({ "services": services })])
            .await
    }

    /// Methods available on a single service
    pub async fn service_info(&self, service: Service) -> Result<Response> {
        self.api_info(&[service]).await
    }

    /// Send any method and return its result
    pub async fn call(&self, method: &Method, params: Vec<Value>) -> Result<Response> {
        let envelope = method.envelope(params)?;
        self.send(envelope, method.service).await
    }

    /// Send a method that changes a setting on the TV
    ///
    /// Fails before anything is sent if the method name does not start with `set`.
    pub async fn set(&self, method: &Method, params: Vec<Value>) -> Result<Response> {
        if !method.is_setter() {
            return Err(Error::not_a_setter(method.name));
        }
        self.call(method, params).await
    }

    /// Post an already built envelope to `service`
    pub async fn send(&self, envelope: Envelope, service: Service) -> Result<Response> {
        let endpoint = &self.inner.endpoint;
        let url = endpoint.url(service.as_str());
        log::debug!(
            "POST {} method={} id={}",
            url,
            envelope.method(),
            envelope.id()
        );

        let request = HttpRequest {
            url,
            headers: transport::auth_headers(endpoint.pre_shared_key()),
            body: serde_json::to_vec(&envelope)
                .map_err(|e| ClientError::Message(e.to_string()))?,
        };

        let response = self.inner.transport.post(request).await?;
        let result = transport::unwrap_result(response)?;
        log::debug!("{} returned {} result(s)", envelope.method(), result.len());

        Ok(Response::new(envelope.method(), result))
    }
}

#[derive(Debug)]
struct DeviceRef {
    endpoint: Endpoint,
    transport: Box<dyn Transport>,
}
