use std::time::Duration;

use rokr_protocols::ECP_PORT;

/// Default number of probes allowed in flight at once.
pub const DEFAULT_WORKERS: usize = 100;

pub struct Config {
    /// Port of the device control service, both for probing and for commands.
    pub port: u16,
    /// Upper bound for the TCP handshake that decides whether a host is worth asking.
    pub connect_timeout: Duration,
    /// Upper bound for the `device-info` request during a scan.
    pub probe_timeout: Duration,
    /// Upper bound for every remote-control request.
    pub command_timeout: Duration,
    /// Maximum number of concurrent probes.
    pub workers: usize,
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: ECP_PORT,
            connect_timeout: Duration::from_secs(1),
            probe_timeout: Duration::from_secs(2),
            command_timeout: Duration::from_secs(5),
            workers: DEFAULT_WORKERS,
            quiet: 0,
            no_banner: false,
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
