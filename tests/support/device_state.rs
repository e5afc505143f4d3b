use serde_json::{json, Value};

/// State kept by the simulated TV between requests
#[derive(Debug, Clone)]
pub struct DeviceState {
    pub powered_on: bool,
    pub wol_enabled: bool,
    pub power_saving: String,
    pub led_mode: String,
    pub led_on: bool,
    pub muted: bool,
    pub volume: i64,
    pub language: String,
    pub active_app: Option<String>,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            powered_on: true,
            wol_enabled: false,
            power_saving: "off".into(),
            led_mode: "Demo".into(),
            led_on: true,
            muted: false,
            volume: 12,
            language: "eng".into(),
            active_app: None,
        }
    }
}

impl DeviceState {
    pub fn standby() -> Self {
        Self {
            powered_on: false,
            ..Self::default()
        }
    }
}

pub fn system_information() -> Value {
    json!({
        "product": "TV",
        "region": "US",
        "language": "eng",
        "model": "XBR-65X900H",
        "serial": "7009876",
        "macAddr": "fc:f1:52:aa:bb:cc",
        "name": "BRAVIA",
        "generation": "5.4.0",
        "area": "USA",
        "cid": "abc",
    })
}

pub fn interface_information() -> Value {
    json!({
        "productCategory": "tv",
        "productName": "BRAVIA",
        "modelName": "XBR-65X900H",
        "serverName": "",
        "interfaceVersion": "5.0.1",
    })
}

pub fn network_interfaces() -> Value {
    json!([
        {
            "netif": "eth0",
            "hwAddr": "fc:f1:52:aa:bb:cc",
            "ipAddrV4": "192.168.1.25",
            "ipAddrV6": "fe80::fef1:52ff:feaa:bbcc",
            "netmask": "255.255.255.0",
            "gateway": "192.168.1.1",
            "dns": ["192.168.1.1"],
        },
        {
            "netif": "wlan0",
            "hwAddr": "fc:f1:52:aa:bb:cd",
            "ipAddrV4": "",
            "ipAddrV6": "",
            "netmask": "",
            "gateway": "",
            "dns": [],
        }
    ])
}

pub fn applications() -> Value {
    json!([
        {
            "title": "Netflix",
            "uri": "com.sony.dtv.com.netflix.ninja.com.netflix.ninja.MainActivity",
            "icon": "http://192.168.1.25/DIAL/icon/netflix.png",
        },
        {
            "title": "YouTube",
            "uri": "com.sony.dtv.com.google.android.youtube.tv.com.google.android.apps.youtube.tv.activity.ShellActivity",
            "icon": "http://192.168.1.25/DIAL/icon/youtube.png",
        }
    ])
}
