//! Subnet discovery.
//!
//! [`NetworkScanner`] fans a [`HostProber`] out over every address in a range,
//! never keeping more than `workers` probe tasks alive at once, and returns only
//! after each of them has finished. Per-host failures never abort the scan.

use std::net::Ipv4Addr;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use rokr_common::config::Config;
use rokr_common::device::{Device, ScanResult};
use rokr_common::error::ScanError;
use rokr_common::network::interface;
use rokr_common::network::range::{self, Ipv4Range, LAN_PREFIX};

mod prober;

pub use prober::{EcpProber, HostProber, identify};

type ProgressHook = Box<dyn Fn(&Device, usize) + Send + Sync>;

/// Resolves the address whose /24 [`NetworkScanner::scan`] searches.
pub type LocalAddress = fn() -> Result<Ipv4Addr, ScanError>;

type ProbeOutput = (Ipv4Addr, anyhow::Result<Option<Device>>);

pub struct NetworkScanner<P> {
    prober: Arc<P>,
    workers: usize,
    local_address: LocalAddress,
    on_device_found: Option<ProgressHook>,
}

impl NetworkScanner<EcpProber> {
    /// A scanner speaking the real control protocol, tuned by `cfg`.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(EcpProber::new(cfg)?, cfg.workers))
    }
}

impl<P: HostProber + 'static> NetworkScanner<P> {
    pub fn new(prober: P, workers: usize) -> Self {
        Self {
            prober: Arc::new(prober),
            workers: workers.max(1),
            local_address: interface::local_ipv4,
            on_device_found: None,
        }
    }

    /// Replaces the outbound-address lookup used by [`scan`](Self::scan).
    pub fn with_local_address(mut self, resolve: LocalAddress) -> Self {
        self.local_address = resolve;
        self
    }

    /// Called once per discovered device with the running total.
    pub fn on_device_found(mut self, hook: impl Fn(&Device, usize) + Send + Sync + 'static) -> Self {
        self.on_device_found = Some(Box::new(hook));
        self
    }

    /// Scans the /24 around this host's outbound address.
    ///
    /// Fails only when that address cannot be determined; an empty result
    /// means the scan ran and nothing answered.
    pub async fn scan(&self) -> Result<ScanResult, ScanError> {
        let local: Ipv4Addr = (self.local_address)()?;
        let hosts: Ipv4Range = range::host_range(local, LAN_PREFIX)?;
        info!(
            "Local address is {local}, searching {} hosts from {} to {}",
            hosts.len(),
            hosts.start_addr,
            hosts.end_addr
        );
        Ok(self.scan_range(hosts).await)
    }

    /// Probes every address in `hosts` and gathers the devices that identified themselves.
    ///
    /// At most `workers` tasks exist at any time; the next address is only
    /// spawned once a running probe has been collected.
    pub async fn scan_range(&self, hosts: Ipv4Range) -> ScanResult {
        let mut probes: JoinSet<ProbeOutput> = JoinSet::new();
        let mut devices: Vec<Device> = Vec::new();

        for addr in hosts.iter() {
            if probes.len() >= self.workers {
                if let Some(joined) = probes.join_next().await {
                    self.collect(joined, &mut devices);
                }
            }

            let prober = Arc::clone(&self.prober);
            probes.spawn(async move {
                let outcome = prober.probe(addr).await;
                (addr, outcome)
            });
        }

        while let Some(joined) = probes.join_next().await {
            self.collect(joined, &mut devices);
        }

        ScanResult::from(devices)
    }

    fn collect(&self, joined: Result<ProbeOutput, tokio::task::JoinError>, devices: &mut Vec<Device>) {
        match joined {
            Ok((_, Ok(Some(device)))) => {
                debug!("Found {device}");
                if let Some(hook) = &self.on_device_found {
                    hook(&device, devices.len() + 1);
                }
                devices.push(device);
            }
            Ok((_, Ok(None))) => {}
            Ok((addr, Err(e))) => warn!("Unexpected error while probing {addr}: {e:#}"),
            Err(e) => error!("Probe task did not complete: {e}"),
        }
    }

    /// Probes a single address, e.g. one the operator typed in.
    pub async fn probe(&self, addr: Ipv4Addr) -> anyhow::Result<Option<Device>> {
        self.prober.probe(addr).await
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
