use super::{
    Device, InterfaceInfo, LedIndicator, LedMode, NetworkInfo, Outcome, Response,
    SupportedFunction, SystemInfo,
};
use crate::envelope::{Method, Service};
use crate::error::Result;

use serde_json::json;

const GET_SYSTEM_INFORMATION: Method =
    Method::new(Service::System, "getSystemInformation", "1.0");
const GET_NETWORK_SETTINGS: Method = Method::new(Service::System, "getNetworkSettings", "1.0");
const GET_INTERFACE_INFORMATION: Method =
    Method::new(Service::System, "getInterfaceInformation", "1.0");
const GET_LED_INDICATOR_STATUS: Method =
    Method::new(Service::System, "getLEDIndicatorStatus", "1.0");
const SET_LED_INDICATOR_STATUS: Method =
    Method::new(Service::System, "setLEDIndicatorStatus", "1.1");
const GET_SYSTEM_SUPPORTED_FUNCTION: Method =
    Method::new(Service::System, "getSystemSupportedFunction", "1.0");
const SET_LANGUAGE: Method = Method::new(Service::System, "setLanguage", "1.0");
const REQUEST_REBOOT: Method = Method::new(Service::System, "requestReboot", "1.0");

/// The `system` service
#[derive(Debug, Clone, Copy)]
pub struct System<'a> {
    device: &'a Device,
}

impl<'a> System<'a> {
    pub(super) fn new(device: &'a Device) -> Self {
        Self { device }
    }

    /// Model, serial number, mac address and the like
    pub async fn information(&self) -> Result<SystemInfo> {
        self.device
            .call(&GET_SYSTEM_INFORMATION, vec![])
            .await?
            .view("SystemInfo")
    }

    /// Settings of the network interface `netif`, or of every interface if `netif` is empty
    pub async fn network_settings(&self, netif: &str) -> Result<Vec<NetworkInfo>> {
        // Interfaces come back wrapped one level deeper than other results
        let res = self
            .device
            .call(&GET_NETWORK_SETTINGS, vec![json!({ "netif": netif })])
            .await?;
        Response::views(res.nested()?, "NetworkInfo")
    }

    /// Information about the REST API served by the TV
    pub async fn interface_information(&self) -> Result<InterfaceInfo> {
        self.device
            .call(&GET_INTERFACE_INFORMATION, vec![])
            .await?
            .view("InterfaceInfo")
    }

    pub async fn led_status(&self) -> Result<LedIndicator> {
        self.device
            .call(&GET_LED_INDICATOR_STATUS, vec![])
            .await?
            .view("LEDIndicator")
    }

    /// Change the LED indicator
    ///
    /// Nothing is sent if the indicator already has both this `mode` and this `status`.
    pub async fn set_led_status(&self, mode: LedMode, status: bool) -> Result<Outcome> {
        let current = self.led_status().await?;
        if current.mode == mode && current.status == status {
            log::info!("LED indicator already {} ({})", mode, status);
            return Ok(Outcome::Unchanged);
        }

        let res = self
            .device
            .set(
                &SET_LED_INDICATOR_STATUS,
                vec![json!({ "mode": mode.as_str(), "status": status.to_string() })],
            )
            .await?;
        Ok(Outcome::Applied(res))
    }

    pub async fn supported_functions(&self) -> Result<Vec<SupportedFunction>> {
        let res = self
            .device
            .call(&GET_SYSTEM_SUPPORTED_FUNCTION, vec![])
            .await?;
        Response::views(res.nested()?, "SupportedFunc")
    }

    /// Change the menu language. Which languages are accepted depends on the region.
    pub async fn set_language(&self, language: &str) -> Result<Response> {
        self.device
            .set(&SET_LANGUAGE, vec![json!({ "language": language })])
            .await
    }

    pub async fn reboot(&self) -> Result<Response> {
        self.device.call(&REQUEST_REBOOT, vec![]).await
    }
}
