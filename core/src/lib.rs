//! # rokr core
//!
//! The two pieces of the tool that touch the network:
//!
//! * **[`scanner`]**: finds every control-capable player on the local subnet.
//! * **[`dispatcher`]**: sends one remote-control request to one player.
//!
//! Both return plain values. A failed probe drops a host from the result,
//! a failed command becomes a [`CommandOutcome`](rokr_common::outcome::CommandOutcome).

pub mod dispatcher;
pub mod network;
pub mod scanner;

pub use dispatcher::CommandDispatcher;
pub use scanner::{EcpProber, HostProber, LocalAddress, NetworkScanner};
