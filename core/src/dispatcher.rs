//! One remote-control request per call.
//!
//! The dispatcher keeps no session. Every method performs exactly one HTTP
//! exchange and folds whatever happened into a [`CommandOutcome`].

use std::error::Error as StdError;

use anyhow::Context;
use reqwest::StatusCode;
use tracing::debug;

use rokr_common::config::Config;
use rokr_common::device::Device;
use rokr_common::outcome::CommandOutcome;
use rokr_protocols::{AppId, Endpoint, Key};

pub struct CommandDispatcher {
    client: reqwest::Client,
    port: u16,
}

impl CommandDispatcher {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(cfg.command_timeout)
            .no_proxy()
            .build()
            .context("building HTTP client for commands")?;

        Ok(Self {
            client,
            port: cfg.port,
        })
    }

    pub async fn send_keypress(&self, device: &Device, key: Key) -> CommandOutcome {
        self.post(self.endpoint(device).keypress(key)).await
    }

    pub async fn send_launch(&self, device: &Device, app: AppId) -> CommandOutcome {
        self.post(self.endpoint(device).launch(app)).await
    }

    pub async fn send_search(&self, device: &Device, query: &str) -> CommandOutcome {
        self.post(self.endpoint(device).search(query)).await
    }

    /// Fetches the installed-app listing. The body is passed through untouched.
    pub async fn list_apps(&self, device: &Device) -> CommandOutcome {
        let url = self.endpoint(device).apps();
        debug!("GET {url}");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return transport_error(e),
        };

        let status: StatusCode = response.status();
        if status != StatusCode::OK {
            return outcome_from_status(status.as_u16());
        }

        match response.text().await {
            Ok(body) => CommandOutcome::Success {
                status: status.as_u16(),
                payload: Some(body),
            },
            Err(e) => transport_error(e),
        }
    }

    async fn post(&self, url: String) -> CommandOutcome {
        debug!("POST {url}");
        let outcome = match self.client.post(&url).body("").send().await {
            Ok(response) => outcome_from_status(response.status().as_u16()),
            Err(e) => transport_error(e),
        };
        debug!("{url} -> {outcome}");
        outcome
    }

    fn endpoint(&self, device: &Device) -> Endpoint {
        Endpoint::new(device.ip(), self.port)
    }
}

fn outcome_from_status(status: u16) -> CommandOutcome {
    if status == StatusCode::OK.as_u16() {
        CommandOutcome::success(status)
    } else {
        CommandOutcome::Failure { status }
    }
}

fn transport_error(err: reqwest::Error) -> CommandOutcome {
    CommandOutcome::Error {
        message: describe(err),
    }
}

/// The error and all of its sources, outermost first.
fn describe<E>(err: E) -> String
where
    E: StdError + Send + Sync + 'static,
{
    let message = format!("{:#}", anyhow::Error::new(err));
    if message.trim().is_empty() {
        "request failed".to_string()
    } else {
        message
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
