//! Shared building blocks for the `rokr` workspace.
//!
//! * **[`device`]**: discovered devices, scan snapshots and the registry a UI reads from.
//! * **[`outcome`]**: the typed result of a single remote-control command.
//! * **[`network`]**: local address discovery and IPv4 range math.
//! * **[`config`]**: runtime knobs shared by the scanner, the dispatcher and the CLI.

pub mod config;
pub mod device;
pub mod error;
pub mod network;
pub mod outcome;

#[doc(hidden)]
pub use tracing;

/// Logs an informational event through `tracing`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Logs a positive result. The CLI formatter renders these with a distinct marker.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "rokr::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
