use anyhow::{Context, anyhow};

use crate::commands::scan;
use crate::terminal::{format, print};
use rokr_common::config::Config;
use rokr_common::device::{Device, DeviceRegistry, DeviceSelector};
use rokr_common::outcome::CommandOutcome;
use rokr_common::{info, warn};
use rokr_core::{CommandDispatcher, EcpProber, NetworkScanner};
use rokr_protocols::{AppId, Key};

/// What to ask of the selected player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    Launch(AppId),
    Search(String),
    ListApps,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Key(key) => write!(f, "keypress/{key}"),
            Action::Launch(app) => write!(f, "launch/{app}"),
            Action::Search(query) => write!(f, "search \"{query}\""),
            Action::ListApps => f.write_str("query/apps"),
        }
    }
}

/// Resolves the player, sends one command and prints the response.
///
/// A failed or unanswered command is reported, not returned as an error.
pub async fn run(action: Action, selector: Option<DeviceSelector>, cfg: &Config) -> anyhow::Result<()> {
    let device: Device = resolve_device(selector, cfg).await?;
    let dispatcher = CommandDispatcher::new(cfg)?;

    print::print_status(format!("Sending command: {action} to {device}"));
    let outcome: CommandOutcome = dispatch(&dispatcher, &device, &action).await;
    print::print_status(format!("Response: {}", format::outcome(&outcome)));

    if let Some(body) = outcome.payload() {
        print::block(body);
    }
    Ok(())
}

async fn dispatch(dispatcher: &CommandDispatcher, device: &Device, action: &Action) -> CommandOutcome {
    match action {
        Action::Key(key) => dispatcher.send_keypress(device, *key).await,
        Action::Launch(app) => dispatcher.send_launch(device, *app).await,
        Action::Search(query) => dispatcher.send_search(device, query).await,
        Action::ListApps => dispatcher.list_apps(device).await,
    }
}

async fn resolve_device(selector: Option<DeviceSelector>, cfg: &Config) -> anyhow::Result<Device> {
    if let Some(DeviceSelector::Ip(ip)) = selector {
        let scanner: NetworkScanner<EcpProber> = NetworkScanner::from_config(cfg)?;
        return scanner
            .probe(ip)
            .await
            .with_context(|| format!("probing {ip}"))?
            .ok_or_else(|| anyhow!("{ip} did not identify itself as a player on port {}", cfg.port));
    }

    let mut registry = DeviceRegistry::new();
    registry.replace(scan::discover(None, cfg).await?);

    if registry.is_empty() {
        anyhow::bail!("no players found on the local network");
    }

    let selector: DeviceSelector = match selector {
        Some(selector) => selector,
        None => {
            if registry.len() > 1 {
                warn!("{} players found, using the first one; pick another with --device", registry.len());
            }
            DeviceSelector::Index(0)
        }
    };

    let device = registry
        .find(&selector)
        .cloned()
        .ok_or_else(|| anyhow!("no player matches {selector:?}"))?;
    info!("Controlling {device}");
    Ok(device)
}
