use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::ScanError;

/// Prefix assumed for the local network when none is given.
///
/// Real deployments may use other masks; the scanner does not try to detect them.
pub const LAN_PREFIX: u8 = 24;

/// An inclusive range of IPv4 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Ipv4Addr> + use<> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> usize {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        if end < start {
            0
        } else {
            (end - start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let addr: u32 = addr.into();
        u32::from(self.start_addr) <= addr && addr <= u32::from(self.end_addr)
    }
}

/// Usable host addresses of the network that contains `addr`.
///
/// Network and broadcast addresses are stripped. Blocks too small to have
/// them (/31, /32) are returned whole.
pub fn host_range(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Range, ScanError> {
    let network = Ipv4Network::new(addr, prefix)
        .map_err(|_| ScanError::InvalidNetwork { addr, prefix })?;
    Ok(usable_hosts(&network))
}

/// Usable host addresses of an explicit network, e.g. one given on the command line.
pub fn usable_hosts(network: &Ipv4Network) -> Ipv4Range {
    let net_u32: u32 = u32::from(network.network());
    let broadcast_u32: u32 = u32::from(network.broadcast());

    if broadcast_u32.saturating_sub(net_u32) < 2 {
        return Ipv4Range::new(network.network(), network.broadcast());
    }

    Ipv4Range::new(
        Ipv4Addr::from(net_u32 + 1),
        Ipv4Addr::from(broadcast_u32 - 1),
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
