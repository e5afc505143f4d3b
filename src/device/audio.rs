use super::{Device, Response, VolumeInfo};
use crate::envelope::{Method, Service};
use crate::error::Result;

use serde_json::json;

const GET_SOUND_SETTINGS: Method = Method::new(Service::Audio, "getSoundSettings", "1.1");
const GET_SPEAKER_SETTINGS: Method = Method::new(Service::Audio, "getSpeakerSettings", "1.0");
const GET_VOLUME_INFORMATION: Method =
    Method::new(Service::Audio, "getVolumeInformation", "1.0");
const SET_AUDIO_MUTE: Method = Method::new(Service::Audio, "setAudioMute", "1.0");

pub const DEFAULT_SOUND_TARGET: &str = "outputTerminal";
pub const DEFAULT_SPEAKER_TARGET: &str = "tvPosition";

/// The `audio` service
#[derive(Debug, Clone, Copy)]
pub struct AudioControl<'a> {
    device: &'a Device,
}

impl<'a> AudioControl<'a> {
    pub(super) fn new(device: &'a Device) -> Self {
        Self { device }
    }

    /// Sound settings for `target`, `None` meaning `outputTerminal`
    pub async fn sound_settings(&self, target: Option<&str>) -> Result<Response> {
        let target = target.unwrap_or(DEFAULT_SOUND_TARGET);
        self.device
            .call(&GET_SOUND_SETTINGS, vec![json!({ "target": target })])
            .await
    }

    /// Speaker settings for `target`, `None` meaning `tvPosition`
    pub async fn speaker_settings(&self, target: Option<&str>) -> Result<Response> {
        let target = target.unwrap_or(DEFAULT_SPEAKER_TARGET);
        self.device
            .call(&GET_SPEAKER_SETTINGS, vec![json!({ "target": target })])
            .await
    }

    /// Volume and mute status of every output
    pub async fn volume_information(&self) -> Result<Vec<VolumeInfo>> {
        let res = self.device.call(&GET_VOLUME_INFORMATION, vec![]).await?;
        Response::views(res.nested()?, "VolumeInfo")
    }

    pub async fn set_audio_mute(&self, mute: bool) -> Result<Response> {
        self.device
            .set(&SET_AUDIO_MUTE, vec![json!({ "status": mute })])
            .await
    }
}
