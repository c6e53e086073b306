use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use pnet::ipnetwork::Ipv4Network;
use tracing::Instrument;

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};
use rokr_common::config::Config;
use rokr_common::device::{Device, ScanResult};
use rokr_common::network::range;
use rokr_common::success;
use rokr_core::{EcpProber, NetworkScanner};

pub async fn scan(subnet: Option<Ipv4Network>, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let result: ScanResult = discover(subnet, cfg).await?;
    discovery_ends(&result, start_time.elapsed(), cfg);
    Ok(())
}

/// Runs one scan behind the spinner and returns the snapshot.
pub async fn discover(subnet: Option<Ipv4Network>, cfg: &Config) -> anyhow::Result<ScanResult> {
    let span = spinner::discovery_span(cfg.port);
    let progress = span.clone();

    let scanner: NetworkScanner<EcpProber> = NetworkScanner::from_config(cfg)?
        .on_device_found(move |_, count| spinner::report_discovery_progress(&progress, count));

    let result = match subnet {
        Some(network) => {
            let hosts = range::usable_hosts(&network);
            scanner.scan_range(hosts).instrument(span).await
        }
        None => scanner
            .scan()
            .instrument(span)
            .await
            .context("the scan could not start")?,
    };

    Ok(result)
}

fn discovery_ends(result: &ScanResult, total_time: Duration, cfg: &Config) {
    if result.is_empty() {
        print::header("zero players detected", cfg.quiet);
        if cfg.quiet == 0 {
            print::no_results();
        }
        return;
    }

    print::header("players", cfg.quiet);
    for (idx, device) in result.iter().enumerate() {
        print_device_tree(device, idx, cfg);
        if idx + 1 != result.len() && cfg.quiet < 2 {
            mprint!();
        }
    }

    print_summary(result.len(), total_time, cfg);
}

fn print_device_tree(device: &Device, idx: usize, cfg: &Config) {
    if cfg.quiet >= 2 {
        print::print(&format!("{}\t{}", device.ip(), device.name()));
        return;
    }
    print::tree_head(idx, device.name());
    print::as_tree_one_level(format::device_to_details(device, cfg.port));
}

fn print_summary(count: usize, total_time: Duration, cfg: &Config) {
    let unit: &str = if count == 1 { "player" } else { "players" };
    let found: ColoredString = format!("{count} {unit}").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Discovery Complete: {found} identified in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        1 => {
            mprint!();
            success!("{}", output)
        }
        _ => {}
    }
}
