use std::io;

use thiserror::Error;

/// Conditions that stop a scan from running at all.
///
/// Hosts that do not answer are never errors; they are simply absent from the result.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not determine the local IPv4 address: {0}")]
    LocalAddressUnresolvable(#[source] io::Error),
    #[error("local address {0} is not a usable IPv4 address")]
    UnusableLocalAddress(std::net::IpAddr),
    #[error("invalid network {addr}/{prefix}")]
    InvalidNetwork { addr: std::net::Ipv4Addr, prefix: u8 },
}
