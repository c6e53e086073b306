use std::net::Ipv4Addr;
use std::time::Duration;

use axum::http::StatusCode;
use rokr_common::config::Config;
use rokr_common::device::Device;
use rokr_common::outcome::CommandOutcome;
use rokr_core::CommandDispatcher;
use rokr_protocols::{AppId, Key};

use crate::mock::{self, MockPlayer, RunningPlayer};

fn dispatcher_for(port: u16) -> CommandDispatcher {
    let cfg = Config {
        port,
        command_timeout: Duration::from_secs(2),
        ..Config::default()
    };
    CommandDispatcher::new(&cfg).unwrap()
}

async fn player(mock: MockPlayer) -> (RunningPlayer, Device, CommandDispatcher) {
    let running = mock.serve(Ipv4Addr::LOCALHOST, 0).await.unwrap();
    let device = Device::new(Ipv4Addr::LOCALHOST, "Living Room TV");
    let dispatcher = dispatcher_for(running.port());
    (running, device, dispatcher)
}

#[tokio::test]
async fn keypress_success() {
    let (running, device, dispatcher) = player(MockPlayer::named("Living Room TV")).await;

    let outcome = dispatcher.send_keypress(&device, Key::Home).await;

    assert_eq!(outcome, CommandOutcome::success(200));
    assert_eq!(running.requests(), vec!["POST /keypress/Home".to_string()]);
}

#[tokio::test]
async fn keypress_failure_carries_status() {
    let (_running, device, dispatcher) = player(
        MockPlayer::named("Living Room TV").with_command_status(StatusCode::INTERNAL_SERVER_ERROR),
    )
    .await;

    let outcome = dispatcher.send_keypress(&device, Key::Home).await;

    assert_eq!(outcome, CommandOutcome::Failure { status: 500 });
}

#[tokio::test]
async fn keypress_to_a_refusing_host_is_an_error_value() {
    let dispatcher = dispatcher_for(mock::closed_port().unwrap());
    let device = Device::new(Ipv4Addr::LOCALHOST, "Gone");

    match dispatcher.send_keypress(&device, Key::Home).await {
        CommandOutcome::Error { message } => assert!(!message.is_empty()),
        other => panic!("expected an error outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_player_times_out_into_an_error_value() {
    let running = MockPlayer::named("Slow")
        .with_command_delay(Duration::from_secs(3))
        .serve(Ipv4Addr::LOCALHOST, 0)
        .await
        .unwrap();
    let cfg = Config {
        port: running.port(),
        command_timeout: Duration::from_millis(300),
        ..Config::default()
    };
    let dispatcher = CommandDispatcher::new(&cfg).unwrap();
    let device = Device::new(Ipv4Addr::LOCALHOST, "Slow");

    let outcome = dispatcher.send_keypress(&device, Key::Play).await;

    assert!(matches!(outcome, CommandOutcome::Error { .. }), "got {outcome:?}");
}

#[tokio::test]
async fn launch_posts_the_numeric_id() {
    let (running, device, dispatcher) = player(MockPlayer::named("Living Room TV")).await;

    let outcome = dispatcher.send_launch(&device, AppId::DISNEY_PLUS).await;

    assert!(outcome.is_success());
    assert_eq!(running.requests(), vec!["POST /launch/291097".to_string()]);
}

#[tokio::test]
async fn search_query_is_percent_encoded_on_the_wire() {
    let (running, device, dispatcher) = player(MockPlayer::named("Living Room TV")).await;

    let outcome = dispatcher.send_search(&device, "stranger things").await;

    assert!(outcome.is_success());
    let requests = running.requests();
    assert_eq!(requests.len(), 1);
    let path = requests[0].trim_start_matches("POST ");
    assert_eq!(path, "/search/browse?keyword=stranger%20things");
    assert!(!path.contains(' '));
}

#[tokio::test]
async fn list_apps_returns_the_body_verbatim() {
    let apps = "<apps>\n\t<app id=\"12\" type=\"appl\" version=\"4.1.218\">Netflix</app>\n\t<app id=\"837\" type=\"appl\" version=\"1.0.80000286\">YouTube</app>\n</apps>\n";
    let (running, device, dispatcher) =
        player(MockPlayer::named("Living Room TV").with_apps(StatusCode::OK, apps)).await;

    let outcome = dispatcher.list_apps(&device).await;

    assert_eq!(
        outcome,
        CommandOutcome::Success {
            status: 200,
            payload: Some(apps.to_string()),
        }
    );
    assert_eq!(running.requests(), vec!["GET /query/apps".to_string()]);
}

#[tokio::test]
async fn list_apps_failure_has_no_payload() {
    let (_running, device, dispatcher) = player(
        MockPlayer::named("Living Room TV").with_apps(StatusCode::SERVICE_UNAVAILABLE, "busy"),
    )
    .await;

    let outcome = dispatcher.list_apps(&device).await;

    assert_eq!(outcome, CommandOutcome::Failure { status: 503 });
    assert_eq!(outcome.payload(), None);
}

#[tokio::test]
async fn each_call_is_exactly_one_request() {
    let (running, device, dispatcher) = player(
        MockPlayer::named("Living Room TV").with_command_status(StatusCode::SERVICE_UNAVAILABLE),
    )
    .await;

    dispatcher.send_keypress(&device, Key::Up).await;
    dispatcher.send_keypress(&device, Key::Down).await;

    assert_eq!(
        running.requests(),
        vec!["POST /keypress/Up".to_string(), "POST /keypress/Down".to_string()]
    );
}

/// Two players on different addresses are driven at the same time through one dispatcher.
#[tokio::test]
#[cfg(target_os = "linux")]
async fn concurrent_commands_to_two_players_do_not_interfere() {
    let first = MockPlayer::named("Den")
        .serve(Ipv4Addr::LOCALHOST, 0)
        .await
        .unwrap();
    let second = MockPlayer::named("Kitchen")
        .serve(Ipv4Addr::new(127, 0, 0, 2), first.port())
        .await
        .unwrap();
    let dispatcher = dispatcher_for(first.port());
    let den = Device::new(Ipv4Addr::LOCALHOST, "Den");
    let kitchen = Device::new(Ipv4Addr::new(127, 0, 0, 2), "Kitchen");

    let (pressed, launched) = tokio::join!(
        dispatcher.send_keypress(&den, Key::VolumeUp),
        dispatcher.send_launch(&kitchen, AppId::YOUTUBE),
    );

    assert_eq!(pressed, CommandOutcome::success(200));
    assert_eq!(launched, CommandOutcome::success(200));
    assert_eq!(first.requests(), vec!["POST /keypress/VolumeUp".to_string()]);
    assert_eq!(second.requests(), vec!["POST /launch/837".to_string()]);
}
