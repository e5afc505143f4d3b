use super::{Device, Response};
use crate::envelope::{Method, Service};
use crate::error::Result;

use serde_json::json;

const GET_CONTENT_COUNT: Method = Method::new(Service::AvContent, "getContentCount", "1.1");
const GET_CONTENT_LIST: Method = Method::new(Service::AvContent, "getContentList", "1.5");

pub const DEFAULT_SOURCE: &str = "extInput:hdmi";
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// The `avContent` service
#[derive(Debug, Clone, Copy)]
pub struct AvContent<'a> {
    device: &'a Device,
}

impl<'a> AvContent<'a> {
    pub(super) fn new(device: &'a Device) -> Self {
        Self { device }
    }

    /// Number of items under `source`, `None` meaning the HDMI inputs
    pub async fn content_count(&self, source: Option<&str>) -> Result<Response> {
        let source = source.unwrap_or(DEFAULT_SOURCE);
        self.device
            .call(&GET_CONTENT_COUNT, vec![json!({ "source": source })])
            .await
    }

    /// Up to `count` items under `uri`, starting at index `start`
    pub async fn content_list(&self, uri: Option<&str>, start: u32, count: u32) -> Result<Response> {
        let uri = uri.unwrap_or(DEFAULT_SOURCE);
        self.device
            .call(
                &GET_CONTENT_LIST,
                vec![json!({ "stIdx": start, "cnt": count, "uri": uri })],
            )
            .await
    }

    /// First page of HDMI inputs
    pub async fn inputs(&self) -> Result<Response> {
        self.content_list(None, 0, DEFAULT_PAGE_SIZE).await
    }
}
