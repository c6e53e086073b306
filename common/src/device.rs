//! # Discovered Devices
//!
//! A [`Device`] only exists because a probe saw a valid identification response.
//! Scans hand back a [`ScanResult`] snapshot; presentation code keeps the latest
//! snapshot in a [`DeviceRegistry`] and selects devices from it.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Device {
    ip: Ipv4Addr,
    name: String,
}

impl Device {
    pub fn new(ip: Ipv4Addr, name: impl Into<String>) -> Self {
        Self {
            ip,
            name: name.into(),
        }
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.ip)
    }
}

/// Devices found by one scan, ordered by address.
///
/// An address appears at most once. The order is the one listings show and
/// the one [`DeviceSelector::Index`] counts in, whatever order probes completed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    devices: Vec<Device>,
}

impl ScanResult {
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    /// The discovered addresses, for order-independent comparisons.
    pub fn ips(&self) -> BTreeSet<Ipv4Addr> {
        self.devices.iter().map(Device::ip).collect()
    }
}

impl FromIterator<Device> for ScanResult {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        let mut seen: HashSet<Ipv4Addr> = HashSet::new();
        let mut devices: Vec<Device> = iter
            .into_iter()
            .filter(|device| seen.insert(device.ip))
            .collect();
        devices.sort_by_key(Device::ip);
        Self { devices }
    }
}

impl From<Vec<Device>> for ScanResult {
    fn from(devices: Vec<Device>) -> Self {
        devices.into_iter().collect()
    }
}

impl IntoIterator for ScanResult {
    type Item = Device;
    type IntoIter = std::vec::IntoIter<Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

/// How a caller points at one device in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    Index(usize),
    Ip(Ipv4Addr),
    Name(String),
}

impl std::str::FromStr for DeviceSelector {
    type Err = String;

    /// An IPv4 address, a zero-based index, or anything else as a device name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("device selector cannot be empty".to_string());
        }
        if let Ok(ip) = s.parse::<Ipv4Addr>() {
            return Ok(DeviceSelector::Ip(ip));
        }
        if let Ok(idx) = s.parse::<usize>() {
            return Ok(DeviceSelector::Index(idx));
        }
        Ok(DeviceSelector::Name(s.to_string()))
    }
}

/// Holds the latest scan snapshot for a presentation layer.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    current: ScanResult,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a new snapshot, returning the previous one.
    pub fn replace(&mut self, result: ScanResult) -> ScanResult {
        std::mem::replace(&mut self.current, result)
    }

    pub fn devices(&self) -> &[Device] {
        self.current.devices()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Device> {
        self.current.devices().get(idx)
    }

    pub fn find(&self, selector: &DeviceSelector) -> Option<&Device> {
        match selector {
            DeviceSelector::Index(idx) => self.get(*idx),
            DeviceSelector::Ip(ip) => self.current.iter().find(|device| device.ip() == *ip),
            DeviceSelector::Name(name) => self
                .current
                .iter()
                .find(|device| device.name().eq_ignore_ascii_case(name)),
        }
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
