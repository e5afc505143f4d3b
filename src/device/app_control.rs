use super::{AppInfo, Device, Response};
use crate::envelope::{Method, Service};
use crate::error::Result;

use serde_json::json;

const GET_APPLICATION_LIST: Method =
    Method::new(Service::AppControl, "getApplicationList", "1.0");
const GET_APPLICATION_STATUS_LIST: Method =
    Method::new(Service::AppControl, "getApplicationStatusList", "1.0");
const SET_ACTIVE_APP: Method = Method::new(Service::AppControl, "setActiveApp", "1.0");
const TERMINATE_APPS: Method = Method::new(Service::AppControl, "terminateApps", "1.0");

/// The `appControl` service
#[derive(Debug, Clone, Copy)]
pub struct AppControl<'a> {
    device: &'a Device,
}

impl<'a> AppControl<'a> {
    pub(super) fn new(device: &'a Device) -> Self {
        Self { device }
    }

    /// Applications installed on the TV
    pub async fn application_list(&self) -> Result<Vec<AppInfo>> {
        let res = self.device.call(&GET_APPLICATION_LIST, vec![]).await?;
        Response::views(res.nested()?, "AppInfo")
    }

    /// Status of the TV's built-in applications (text input, web browser, ...)
    pub async fn application_status_list(&self) -> Result<Response> {
        self.device.call(&GET_APPLICATION_STATUS_LIST, vec![]).await
    }

    /// Launch the application with `uri`, as found in [`application_list()`](Self::application_list)
    pub async fn set_active_app(&self, uri: &str) -> Result<Response> {
        self.device
            .set(&SET_ACTIVE_APP, vec![json!({ "uri": uri })])
            .await
    }

    /// Close every application that can be closed
    pub async fn terminate_apps(&self) -> Result<Response> {
        self.device.call(&TERMINATE_APPS, vec![]).await
    }
}
