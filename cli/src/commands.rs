pub mod control;
pub mod scan;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use pnet::ipnetwork::Ipv4Network;
use rokr_common::config::{Config, DEFAULT_WORKERS};
use rokr_common::device::DeviceSelector;
use rokr_protocols::{AppId, ECP_PORT, Key};

#[derive(Parser)]
#[command(name = "rokr")]
#[command(about = "Find and drive the streaming players on your network.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Control port of the players
    #[arg(long, global = true, default_value_t = ECP_PORT)]
    pub port: u16,

    /// Seconds to wait for a player to answer a command
    #[arg(long, global = true, default_value_t = 5)]
    pub timeout: u64,

    /// Maximum number of hosts probed at the same time
    #[arg(long, global = true, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Print less; repeat to print only results
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the banner line
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover players on the local network
    #[command(alias = "s")]
    Scan {
        /// Network to search instead of the /24 around this host (e.g. 192.168.0.0/22)
        #[arg(long)]
        subnet: Option<Ipv4Network>,
    },
    /// Press a button on the remote (Home, Up, Select, VolumeUp, ...)
    #[command(alias = "k")]
    Key {
        key: Key,
        /// IP address, index or name of the player; defaults to the first one found
        #[arg(short, long)]
        device: Option<DeviceSelector>,
    },
    /// Launch a channel by numeric id or by name (youtube, netflix, disney)
    #[command(alias = "l")]
    Launch {
        app: AppId,
        #[arg(short, long)]
        device: Option<DeviceSelector>,
    },
    /// Search the player's catalogue
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[arg(short, long)]
        device: Option<DeviceSelector>,
    },
    /// List the channels installed on a player
    #[command(alias = "a")]
    Apps {
        #[arg(short, long)]
        device: Option<DeviceSelector>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            port: self.port,
            command_timeout: Duration::from_secs(self.timeout.max(1)),
            workers: self.workers,
            quiet: self.quiet,
            no_banner: self.no_banner,
            ..Config::default()
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
