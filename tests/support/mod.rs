#![allow(dead_code)]

#[macro_use]
mod macros;
mod device_state;
mod mock_transport;

pub use device_state::DeviceState;
pub use mock_transport::{MockTransport, Scripted};
pub use simulated_device::{Recorded, SimulatedDevice};

use bravia::{Device, Endpoint};

/// Start a simulated TV and get a client connected to it
pub fn simulate(state: DeviceState, psk: Option<&str>) -> (Device, SimulatedDevice) {
    // Start Logger
    if let Err(e) = pretty_env_logger::try_init() {
        log::warn!(target: "test::simulate", "Logger init() returned '{}'", e);
    }

    let simulated = SimulatedDevice::new(state, psk);
    let addr = simulated.serve();

    let mut endpoint = Endpoint::new(addr.to_string());
    if let Some(psk) = psk {
        endpoint = endpoint.with_pre_shared_key(psk);
    }
    (Device::new(endpoint).unwrap(), simulated)
}

/// Client whose requests go to `transport` instead of the network
pub fn mocked(transport: &MockTransport, psk: Option<&str>) -> Device {
    let _ = pretty_env_logger::try_init();

    let mut endpoint = Endpoint::new("192.168.1.25");
    if let Some(psk) = psk {
        endpoint = endpoint.with_pre_shared_key(psk);
    }
    Device::with_transport(endpoint, transport.clone()).unwrap()
}
