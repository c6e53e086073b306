use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::time::Duration;

use axum::http::StatusCode;
use rokr_common::config::Config;
use rokr_common::device::{Device, ScanResult};
use rokr_common::network::range::Ipv4Range;
use rokr_core::{EcpProber, HostProber, NetworkScanner};

use crate::mock::{self, MockPlayer};

fn config_for(port: u16) -> Config {
    Config {
        port,
        connect_timeout: Duration::from_millis(500),
        probe_timeout: Duration::from_millis(500),
        ..Config::default()
    }
}

/// The prober performs the full handshake and identification against a real socket.
#[tokio::test]
async fn probe_identifies_a_player_on_loopback() {
    let player = MockPlayer::named("Living Room TV")
        .serve(Ipv4Addr::LOCALHOST, 0)
        .await
        .unwrap();
    let prober = EcpProber::new(&config_for(player.port())).unwrap();

    let found = prober.probe(Ipv4Addr::LOCALHOST).await.unwrap();

    assert_eq!(found, Some(Device::new(Ipv4Addr::LOCALHOST, "Living Room TV")));
    assert_eq!(player.requests(), vec!["GET /query/device-info".to_string()]);
}

#[tokio::test]
async fn probe_skips_hosts_without_a_name() {
    let player = MockPlayer::named("unused")
        .with_device_info(StatusCode::OK, "<device-info><model-name>X</model-name></device-info>")
        .serve(Ipv4Addr::LOCALHOST, 0)
        .await
        .unwrap();
    let prober = EcpProber::new(&config_for(player.port())).unwrap();

    assert_eq!(prober.probe(Ipv4Addr::LOCALHOST).await.unwrap(), None);
}

#[tokio::test]
async fn probe_skips_non_200_answers() {
    let player = MockPlayer::named("Forbidden")
        .with_device_info(
            StatusCode::FORBIDDEN,
            "<friendly-device-name>Forbidden</friendly-device-name>",
        )
        .serve(Ipv4Addr::LOCALHOST, 0)
        .await
        .unwrap();
    let prober = EcpProber::new(&config_for(player.port())).unwrap();

    assert_eq!(prober.probe(Ipv4Addr::LOCALHOST).await.unwrap(), None);
}

#[tokio::test]
async fn probe_gives_up_on_a_silent_host() {
    let port = mock::closed_port().unwrap();
    let _silent = mock::serve_silent(Ipv4Addr::LOCALHOST, port).await.unwrap();
    let prober = EcpProber::new(&config_for(port)).unwrap();

    assert_eq!(prober.probe(Ipv4Addr::LOCALHOST).await.unwrap(), None);
}

#[tokio::test]
async fn probe_of_closed_port_is_not_an_error() {
    let prober = EcpProber::new(&config_for(mock::closed_port().unwrap())).unwrap();

    let result = prober.probe(Ipv4Addr::LOCALHOST).await;

    assert!(matches!(result, Ok(None)), "unexpected result: {result:?}");
}

/// Several loopback addresses share one port, each behaving differently.
/// Only 127.0.0.1 qualifies as a player.
#[tokio::test]
#[cfg(target_os = "linux")]
async fn scan_range_finds_exactly_the_qualifying_hosts() {
    let good = MockPlayer::named("Living Room TV")
        .serve(Ipv4Addr::LOCALHOST, 0)
        .await
        .unwrap();
    let port = good.port();
    let _error = MockPlayer::named("Broken")
        .with_device_info(StatusCode::INTERNAL_SERVER_ERROR, "")
        .serve(Ipv4Addr::new(127, 0, 0, 2), port)
        .await
        .unwrap();
    let _nameless = MockPlayer::named("unused")
        .with_device_info(StatusCode::OK, "<device-info></device-info>")
        .serve(Ipv4Addr::new(127, 0, 0, 3), port)
        .await
        .unwrap();
    let _silent = mock::serve_silent(Ipv4Addr::new(127, 0, 0, 4), port)
        .await
        .unwrap();

    let scanner = NetworkScanner::from_config(&config_for(port)).unwrap();
    let hosts = Ipv4Range::new(Ipv4Addr::new(127, 0, 0, 1), Ipv4Addr::new(127, 0, 0, 6));

    let result: ScanResult = scanner.scan_range(hosts).await;

    assert_eq!(result.devices(), &[Device::new(Ipv4Addr::LOCALHOST, "Living Room TV")]);
    assert!(result.len() <= hosts.len());
}

#[tokio::test]
#[cfg(target_os = "linux")]
async fn repeated_scans_of_an_unchanged_network_agree() {
    let first_player = MockPlayer::named("Den")
        .serve(Ipv4Addr::LOCALHOST, 0)
        .await
        .unwrap();
    let port = first_player.port();
    let _second_player = MockPlayer::named("Kitchen")
        .serve(Ipv4Addr::new(127, 0, 0, 3), port)
        .await
        .unwrap();

    let scanner = NetworkScanner::from_config(&config_for(port)).unwrap();
    let hosts = Ipv4Range::new(Ipv4Addr::new(127, 0, 0, 1), Ipv4Addr::new(127, 0, 0, 4));

    let first = scanner.scan_range(hosts).await;
    let second = scanner.scan_range(hosts).await;

    let expected = BTreeSet::from([Ipv4Addr::new(127, 0, 0, 1), Ipv4Addr::new(127, 0, 0, 3)]);
    assert_eq!(first.ips(), expected);
    assert_eq!(second.ips(), expected);
}

#[tokio::test]
#[ignore]
async fn scan_of_the_local_subnet_completes() {
    let scanner = NetworkScanner::from_config(&Config::default()).unwrap();
    let result = scanner.scan().await.unwrap();
    assert!(result.len() <= 254);
}

/// This crate does not depend on `tracing`; the shared log macros must still expand here.
#[test]
fn shared_log_macros_expand_without_a_tracing_dependency() {
    let found = 2;
    rokr_common::info!("Searching {found} hosts");
    rokr_common::warn!("{found} players found, using the first one");
    rokr_common::success!("{found} players identified");
}
