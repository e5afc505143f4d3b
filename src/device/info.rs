use serde::{de, Deserialize, Deserializer};

use std::fmt::{self, Display};
use std::result::Result as StdResult;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Identity of the TV, from `getSystemInformation`
pub struct SystemInfo {
    pub product: String,
    pub region: String,
    pub language: String,
    pub model: String,
    pub serial: String,
    pub mac_addr: String,
    pub name: String,
    pub generation: String,
    pub area: String,
    pub cid: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One network interface, from `getNetworkSettings`
pub struct NetworkInfo {
    pub netif: String,
    pub hw_addr: String,
    pub ip_addr_v4: String,
    pub ip_addr_v6: String,
    pub netmask: String,
    pub gateway: String,
    pub dns: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Description of the REST server on the TV
pub struct InterfaceInfo {
    pub product_category: String,
    pub product_name: String,
    pub model_name: String,
    pub server_name: String,
    pub interface_version: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PowerStatus {
    pub status: PowerState,
}

impl PowerStatus {
    pub fn is_active(&self) -> bool {
        self.status == PowerState::Active
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PowerState {
    /// Screen is on
    Active,
    /// Off, but still answering on the network
    Standby,
    #[doc(hidden)]
    Other(String),
}

impl<'de> Deserialize<'de> for PowerState {
    fn deserialize<D>(deserializer: D) -> StdResult<PowerState, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match String::deserialize(deserializer)?.as_str() {
            "active" => PowerState::Active,
            "standby" => PowerState::Standby,
            other => PowerState::Other(other.into()),
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
/// Mode and on/off status of the LED indicator
pub struct LedIndicator {
    pub mode: LedMode,
    #[serde(deserialize_with = "string_or_bool")]
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Modes the LED indicator can be put in
pub enum LedMode {
    Demo,
    AutoBrightnessAdjust,
    Dark,
    SimpleResponse,
    Off,
    #[doc(hidden)]
    Other(String),
}

impl LedMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Demo => "Demo",
            Self::AutoBrightnessAdjust => "AutoBrightnessAdjust",
            Self::Dark => "Dark",
            Self::SimpleResponse => "SimpleResponse",
            Self::Off => "Off",
            Self::Other(mode) => mode,
        }
    }
}

impl From<&str> for LedMode {
    fn from(mode: &str) -> Self {
        match mode {
            "Demo" => Self::Demo,
            "AutoBrightnessAdjust" => Self::AutoBrightnessAdjust,
            "Dark" => Self::Dark,
            "SimpleResponse" => Self::SimpleResponse,
            "Off" => Self::Off,
            other => Self::Other(other.into()),
        }
    }
}

impl Display for LedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LedMode {
    fn deserialize<D>(deserializer: D) -> StdResult<LedMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(LedMode::from(String::deserialize(deserializer)?.as_str()))
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
/// A function the TV reports as supported, e.g. `{"option": "WOL", "value": "..."}`
pub struct SupportedFunction {
    pub option: String,
    pub value: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
/// An application installed on the TV
pub struct AppInfo {
    pub title: String,
    pub uri: String,
    pub icon: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
/// Wake-on-LAN setting
pub struct WolMode {
    pub enabled: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PowerSavingStatus {
    pub mode: PowerSavingMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PowerSavingMode {
    Off,
    Low,
    High,
    /// Screen off, sound on
    PictureOff,
    #[doc(hidden)]
    Other(String),
}

impl PowerSavingMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Off => "off",
            Self::Low => "low",
            Self::High => "high",
            Self::PictureOff => "pictureOff",
            Self::Other(mode) => mode,
        }
    }
}

impl From<&str> for PowerSavingMode {
    fn from(mode: &str) -> Self {
        match mode {
            "off" => Self::Off,
            "low" => Self::Low,
            "high" => Self::High,
            "pictureOff" => Self::PictureOff,
            other => Self::Other(other.into()),
        }
    }
}

impl Display for PowerSavingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PowerSavingMode {
    fn deserialize<D>(deserializer: D) -> StdResult<PowerSavingMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(PowerSavingMode::from(String::deserialize(deserializer)?.as_str()))
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Volume of one output, from `getVolumeInformation`
pub struct VolumeInfo {
    pub target: String,
    pub volume: i64,
    pub mute: bool,
    pub max_volume: i64,
    pub min_volume: i64,
}

// The TV sends some booleans as "true"/"false" strings
fn string_or_bool<'de, D>(deserializer: D) -> StdResult<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Str(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Str(s) => s.to_lowercase().parse::<bool>().or(Err(de::Error::invalid_value(
            de::Unexpected::Str(&s),
            &"a boolean",
        ))),
    }
}
