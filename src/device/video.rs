use super::{Device, Response};
use crate::envelope::{Method, Service};
use crate::error::Result;

use serde::Serialize;
use serde_json::json;

const GET_PICTURE_QUALITY_SETTINGS: Method =
    Method::new(Service::Video, "getPictureQualitySettings", "1.0");
const SET_PICTURE_QUALITY_SETTINGS: Method =
    Method::new(Service::Video, "setPictureQualitySettings", "1.0");

/// One picture setting to change, e.g. `color` to `"2"`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PictureSetting {
    pub target: String,
    pub value: String,
}

impl PictureSetting {
    pub fn new<S: Into<String>, V: ToString>(target: S, value: V) -> Self {
        Self {
            target: target.into(),
            value: value.to_string(),
        }
    }
}

/// The `video` service
#[derive(Debug, Clone, Copy)]
pub struct Video<'a> {
    device: &'a Device,
}

impl<'a> Video<'a> {
    pub(super) fn new(device: &'a Device) -> Self {
        Self { device }
    }

    /// Picture quality settings for `target`, or all of them if `None`
    pub async fn picture_quality_settings(&self, target: Option<&str>) -> Result<Response> {
        self.device
            .call(
                &GET_PICTURE_QUALITY_SETTINGS,
                vec![json!({ "target": target.unwrap_or("") })],
            )
            .await
    }

    pub async fn set_picture_quality_settings(&self, settings: &[PictureSetting]) -> Result<Response> {
        self.device
            .set(
                &SET_PICTURE_QUALITY_SETTINGS,
                vec![json!({ "settings": settings })],
            )
            .await
    }
}
