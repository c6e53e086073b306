use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::ProtocolError;

pub const ECP_PORT: u16 = 8060;

pub const DEVICE_INFO_PATH: &str = "/query/device-info";
pub const APPS_PATH: &str = "/query/apps";

/// Remote buttons, spelled the way the device expects them in `/keypress/{KEY}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Power,
    PowerOn,
    PowerOff,
    Home,
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
    VolumeUp,
    VolumeDown,
    VolumeMute,
    Play,
    Pause,
}

impl Key {
    pub const ALL: [Key; 15] = [
        Key::Power,
        Key::PowerOn,
        Key::PowerOff,
        Key::Home,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Select,
        Key::Back,
        Key::VolumeUp,
        Key::VolumeDown,
        Key::VolumeMute,
        Key::Play,
        Key::Pause,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Power => "Power",
            Key::PowerOn => "PowerOn",
            Key::PowerOff => "PowerOff",
            Key::Home => "Home",
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Select => "Select",
            Key::Back => "Back",
            Key::VolumeUp => "VolumeUp",
            Key::VolumeDown => "VolumeDown",
            Key::VolumeMute => "VolumeMute",
            Key::Play => "Play",
            Key::Pause => "Pause",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Key {
    type Err = ProtocolError;

    /// Case-insensitive. Also takes the labels printed on the remote ("ok", "mute").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "ok" => return Ok(Key::Select),
            "mute" => return Ok(Key::VolumeMute),
            _ => {}
        }

        Key::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProtocolError::UnknownKey(s.to_string()))
    }
}

/// Numeric channel (application) id used by `/launch/{APP_ID}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub u64);

impl AppId {
    pub const YOUTUBE: AppId = AppId(837);
    pub const DISNEY_PLUS: AppId = AppId(291097);
    pub const NETFLIX: AppId = AppId(12);
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppId {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u64>() {
            return Ok(AppId(id));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "youtube" => Ok(AppId::YOUTUBE),
            "netflix" => Ok(AppId::NETFLIX),
            "disney" | "disney+" | "disneyplus" => Ok(AppId::DISNEY_PLUS),
            _ => Err(ProtocolError::UnknownApp(s.to_string())),
        }
    }
}

/// Builds request URLs for one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    ip: Ipv4Addr,
    port: u16,
}

impl Endpoint {
    pub fn new(ip: Ipv4Addr, port: u16) -> Self {
        Self { ip, port }
    }

    pub fn device_info(&self) -> String {
        self.url(DEVICE_INFO_PATH)
    }

    pub fn apps(&self) -> String {
        self.url(APPS_PATH)
    }

    pub fn keypress(&self, key: Key) -> String {
        self.url(&format!("/keypress/{key}"))
    }

    pub fn launch(&self, app: AppId) -> String {
        self.url(&format!("/launch/{app}"))
    }

    /// The keyword is percent-encoded; a space becomes `%20`.
    pub fn search(&self, query: &str) -> String {
        self.url(&format!("/search/browse?keyword={}", urlencoding::encode(query)))
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.ip, self.port, path)
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
