//! Wire details of the External Control Protocol spoken by the players on port 8060.

pub mod device_info;
pub mod ecp;

pub use ecp::{AppId, ECP_PORT, Endpoint, Key};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("unknown app '{0}', expected a numeric id or one of: youtube, netflix, disney")]
    UnknownApp(String),
}
