use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::trace;

use rokr_common::config::Config;
use rokr_common::device::Device;
use rokr_protocols::{Endpoint, device_info};

use crate::network::tcp;

/// Decides whether one address hosts a device.
///
/// `Ok(None)` covers every expected miss: nothing listening, wrong status,
/// no usable name. `Err` is for the unexpected, and is reported by the scanner.
#[async_trait]
pub trait HostProber: Send + Sync {
    async fn probe(&self, addr: Ipv4Addr) -> anyhow::Result<Option<Device>>;
}

/// Probes with the real control protocol: TCP handshake, then `GET /query/device-info`.
pub struct EcpProber {
    client: reqwest::Client,
    port: u16,
    connect_timeout: Duration,
}

impl EcpProber {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(cfg.probe_timeout)
            .no_proxy()
            .build()
            .context("building HTTP client for probes")?;

        Ok(Self {
            client,
            port: cfg.port,
            connect_timeout: cfg.connect_timeout,
        })
    }
}

#[async_trait]
impl HostProber for EcpProber {
    async fn probe(&self, addr: Ipv4Addr) -> anyhow::Result<Option<Device>> {
        let socket_addr = SocketAddr::new(IpAddr::V4(addr), self.port);
        if !tcp::handshake(socket_addr, self.connect_timeout).await? {
            return Ok(None);
        }

        let url: String = Endpoint::new(addr, self.port).device_info();
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) if e.is_builder() => {
                return Err(e).with_context(|| format!("building request for {url}"));
            }
            Err(e) => {
                trace!("{addr} accepted a connection but did not answer: {e}");
                return Ok(None);
            }
        };

        let status: StatusCode = response.status();
        if status != StatusCode::OK {
            trace!("{addr} answered device-info with {status}");
            return Ok(None);
        }

        match response.text().await {
            Ok(body) => Ok(identify(addr, status.as_u16(), &body)),
            Err(e) => {
                trace!("{addr} dropped the device-info body: {e}");
                Ok(None)
            }
        }
    }
}

/// Turns a `device-info` response into a device, if it qualifies.
pub fn identify(addr: Ipv4Addr, status: u16, body: &str) -> Option<Device> {
    if status != StatusCode::OK.as_u16() {
        return None;
    }
    device_info::friendly_name(body).map(|name| Device::new(addr, name))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
