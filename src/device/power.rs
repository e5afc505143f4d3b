use super::{
    Device, Outcome, PowerSavingMode, PowerSavingStatus, PowerState, PowerStatus, WolMode,
};
use crate::envelope::{Method, Service};
use crate::error::Result;

use serde_json::json;

const GET_POWER_STATUS: Method = Method::new(Service::System, "getPowerStatus", "1.0");
const SET_POWER_STATUS: Method = Method::new(Service::System, "setPowerStatus", "1.0");
const GET_POWER_SAVING_MODE: Method = Method::new(Service::System, "getPowerSavingMode", "1.0");
const SET_POWER_SAVING_MODE: Method = Method::new(Service::System, "setPowerSavingMode", "1.0");
const GET_WOL_MODE: Method = Method::new(Service::System, "getWolMode", "1.0");
const SET_WOL_MODE: Method = Method::new(Service::System, "setWolMode", "1.0");

/// Power related methods of the `system` service
///
/// Setters read the current state first and leave the TV alone if it already matches,
/// returning [`Outcome::Unchanged`].
#[derive(Debug, Clone, Copy)]
pub struct Power<'a> {
    device: &'a Device,
}

impl<'a> Power<'a> {
    pub(super) fn new(device: &'a Device) -> Self {
        Self { device }
    }

    pub async fn status(&self) -> Result<PowerStatus> {
        self.device
            .call(&GET_POWER_STATUS, vec![])
            .await?
            .view("PowerStatus")
    }

    /// True if the TV is `active`, false in standby
    pub async fn is_powered_on(&self) -> Result<bool> {
        Ok(self.status().await?.is_active())
    }

    pub async fn power_on(&self) -> Result<Outcome> {
        self.set_power(true).await
    }

    pub async fn power_off(&self) -> Result<Outcome> {
        self.set_power(false).await
    }

    /// Turn the TV on (`true`) or put it in standby (`false`)
    ///
    /// Nothing is sent only if the TV already reports exactly `active` or `standby` respectively.
    pub async fn set_power(&self, on: bool) -> Result<Outcome> {
        let target = if on {
            PowerState::Active
        } else {
            PowerState::Standby
        };
        if self.status().await?.status == target {
            log::info!("Power already {}", if on { "on" } else { "off" });
            return Ok(Outcome::Unchanged);
        }

        let res = self
            .device
            .set(&SET_POWER_STATUS, vec![json!({ "status": on })])
            .await?;
        Ok(Outcome::Applied(res))
    }

    pub async fn power_saving_mode(&self) -> Result<PowerSavingMode> {
        let status: PowerSavingStatus = self
            .device
            .call(&GET_POWER_SAVING_MODE, vec![])
            .await?
            .view("PowerSavingMode")?;
        Ok(status.mode)
    }

    pub async fn set_power_saving_mode(&self, mode: PowerSavingMode) -> Result<Outcome> {
        if self.power_saving_mode().await? == mode {
            log::info!("Power saving mode already {}", mode);
            return Ok(Outcome::Unchanged);
        }

        let res = self
            .device
            .set(&SET_POWER_SAVING_MODE, vec![json!({ "mode": mode.as_str() })])
            .await?;
        Ok(Outcome::Applied(res))
    }

    /// Whether the TV can be woken by a Wake-on-LAN packet
    pub async fn wol_mode(&self) -> Result<bool> {
        let mode: WolMode = self
            .device
            .call(&GET_WOL_MODE, vec![])
            .await?
            .view("WolMode")?;
        Ok(mode.enabled)
    }

    pub async fn set_wol_mode(&self, enabled: bool) -> Result<Outcome> {
        if self.wol_mode().await? == enabled {
            log::info!("Wake-on-LAN already {}", if enabled { "on" } else { "off" });
            return Ok(Outcome::Unchanged);
        }

        let res = self
            .device
            .set(&SET_WOL_MODE, vec![json!({ "enabled": enabled })])
            .await?;
        Ok(Outcome::Applied(res))
    }
}
