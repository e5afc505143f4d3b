use super::super::device_state::{self, DeviceState};

use serde_json::{json, Value};

/// Answer one JSON-RPC call the way a Bravia TV does
pub fn dispatch(
    service: &str,
    method: &str,
    params: &Value,
    id: Value,
    state: &mut DeviceState,
) -> Value {
    log::info!(target: "test::simulated_device::commands", "{}/{}", service, method);
    let param = &params[0];

    match (service, method) {
        ("guide", "getSupportedApiInfo") => {
            let services: Vec<Value> = param["services"]
                .as_array()
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|s| json!({ "service": s, "protocols": ["xhrpost:jsonizer"], "apis": [] }))
                .collect();
            result!(id, [services])
        }

        ("system", "getPowerStatus") => {
            let status = if state.powered_on { "active" } else { "standby" };
            result!(id, [{ "status": status }])
        }
        ("system", "setPowerStatus") => match param["status"].as_bool() {
            Some(on) => {
                state.powered_on = on;
                result!(id, [])
            }
            None => error!(id, 3, "Illegal Argument"),
        },
        ("system", "getWolMode") => result!(id, [{ "enabled": state.wol_enabled }]),
        ("system", "setWolMode") => match param["enabled"].as_bool() {
            Some(enabled) => {
                state.wol_enabled = enabled;
                result!(id, [])
            }
            None => error!(id, 3, "Illegal Argument"),
        },
        ("system", "getPowerSavingMode") => result!(id, [{ "mode": state.power_saving }]),
        ("system", "setPowerSavingMode") => match param["mode"].as_str() {
            Some(mode @ ("off" | "low" | "high" | "pictureOff")) => {
                state.power_saving = mode.into();
                result!(id, [])
            }
            _ => error!(id, 3, "Illegal Argument"),
        },
        ("system", "getLEDIndicatorStatus") => result!(
            id,
            [{ "mode": state.led_mode, "status": state.led_on.to_string() }]
        ),
        ("system", "setLEDIndicatorStatus") => {
            match (param["mode"].as_str(), param["status"].as_str()) {
                (Some(mode), Some(status @ ("true" | "false"))) => {
                    state.led_mode = mode.into();
                    state.led_on = status == "true";
                    result!(id, [])
                }
                _ => error!(id, 3, "Illegal Argument"),
            }
        }
        ("system", "getSystemInformation") => result!(id, [device_state::system_information()]),
        ("system", "getInterfaceInformation") => {
            result!(id, [device_state::interface_information()])
        }
        ("system", "getNetworkSettings") => {
            let netif = param["netif"].as_str().unwrap_or_default();
            let interfaces: Vec<Value> = device_state::network_interfaces()
                .as_array()
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .filter(|i| netif.is_empty() || i["netif"] == netif)
                .collect();
            result!(id, [interfaces])
        }
        ("system", "getSystemSupportedFunction") => result!(
            id,
            [[
                { "option": "WOL", "value": "fc:f1:52:aa:bb:cc" },
                { "option": "PowerSaving", "value": "true" }
            ]]
        ),
        ("system", "setLanguage") => match param["language"].as_str() {
            Some(lang) if lang.len() == 3 => {
                state.language = lang.into();
                result!(id, [])
            }
            _ => error!(id, 3, "Illegal Argument"),
        },
        ("system", "requestReboot") => result!(id, []),

        ("appControl", "getApplicationList") => result!(id, [device_state::applications()]),
        ("appControl", "getApplicationStatusList") => result!(
            id,
            [[
                { "name": "textInput", "status": "off" },
                { "name": "cursorDisplay", "status": "off" },
                { "name": "webBrowse", "status": "off" }
            ]]
        ),
        ("appControl", "setActiveApp") if !state.powered_on => error!(id, 7, "Illegal State"),
        ("appControl", "setActiveApp") => {
            let uri = param["uri"].as_str().unwrap_or_default();
            let known = device_state::applications()
                .as_array()
                .map(|apps| apps.iter().any(|a| a["uri"] == uri))
                .unwrap_or(false);
            if known {
                state.active_app = Some(uri.into());
                result!(id, [])
            } else {
                error!(id, 3, "Illegal Argument")
            }
        }
        ("appControl", "terminateApps") => {
            state.active_app = None;
            result!(id, [])
        }

        ("audio", "getVolumeInformation") => result!(
            id,
            [[
                {
                    "target": "speaker",
                    "volume": state.volume,
                    "mute": state.muted,
                    "maxVolume": 100,
                    "minVolume": 0
                }
            ]]
        ),
        ("audio", "setAudioMute") => match param["status"].as_bool() {
            Some(mute) => {
                state.muted = mute;
                result!(id, [])
            }
            None => error!(id, 3, "Illegal Argument"),
        },
        ("audio", "getSoundSettings") => result!(
            id,
            [[{ "target": param["target"], "currentValue": "speaker" }]]
        ),
        ("audio", "getSpeakerSettings") => result!(
            id,
            [[{ "target": param["target"], "currentValue": "tableTop" }]]
        ),

        ("avContent", "getContentCount") => result!(id, [{ "count": 4 }]),
        ("avContent", "getContentList") => {
            let start = param["stIdx"].as_u64().unwrap_or(0);
            let count = param["cnt"].as_u64().unwrap_or(50);
            let items: Vec<Value> = (1..=4u64)
                .skip(start as usize)
                .take(count as usize)
                .map(|n| {
                    json!({
                        "uri": format!("extInput:hdmi?port={}", n),
                        "title": format!("HDMI {}", n),
                        "index": n - 1,
                    })
                })
                .collect();
            result!(id, [items])
        }

        ("video", "getPictureQualitySettings") => result!(
            id,
            [[{ "target": "color", "currentValue": "50" }]]
        ),
        ("video", "setPictureQualitySettings") => match param["settings"].as_array() {
            Some(settings) if !settings.is_empty() => result!(id, []),
            _ => error!(id, 3, "Illegal Argument"),
        },

        (_, method) => error!(id, 12, method),
    }
}
