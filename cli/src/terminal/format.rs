use colored::*;

use crate::terminal::colors;
use rokr_common::device::Device;
use rokr_common::outcome::CommandOutcome;

pub type Detail = (String, ColoredString);

pub fn device_to_details(device: &Device, port: u16) -> Vec<Detail> {
    vec![
        (
            String::from("IPv4"),
            device.ip().to_string().color(colors::IPV4_ADDR),
        ),
        (String::from("Port"), port.to_string().color(colors::PORT)),
    ]
}

pub fn outcome(outcome: &CommandOutcome) -> ColoredString {
    match outcome {
        CommandOutcome::Success { .. } => outcome.to_string().color(colors::SUCCESS).bold(),
        CommandOutcome::Failure { .. } | CommandOutcome::Error { .. } => {
            outcome.to_string().color(colors::FAILURE).bold()
        }
    }
}
