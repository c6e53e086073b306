use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

use crate::error::ScanError;

/// Any routable address works here; connecting a UDP socket sends nothing.
const ROUTE_PROBE_ADDR: (Ipv4Addr, u16) = (Ipv4Addr::new(8, 8, 8, 8), 80);

/// Finds the IPv4 address this host uses for outbound traffic.
///
/// The kernel picks a source address as soon as a datagram socket is connected,
/// so the route is resolved without a single packet leaving the machine.
pub fn local_ipv4() -> Result<Ipv4Addr, ScanError> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
        .map_err(ScanError::LocalAddressUnresolvable)?;
    socket
        .connect(ROUTE_PROBE_ADDR)
        .map_err(ScanError::LocalAddressUnresolvable)?;
    let local: SocketAddr = socket
        .local_addr()
        .map_err(ScanError::LocalAddressUnresolvable)?;

    usable_ipv4(local.ip())
}

fn usable_ipv4(ip: IpAddr) -> Result<Ipv4Addr, ScanError> {
    match ip {
        IpAddr::V4(v4) if !v4.is_unspecified() => Ok(v4),
        other => Err(ScanError::UnusableLocalAddress(other)),
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
