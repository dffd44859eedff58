use crate::lifecycle::{LaunchError, LifecycleController, LifecycleState};
use crate::tests::{
    ClosingNative, ExitingServer, FailingNative, FailingServer, RecordingBrowser, SilentServer,
    setup_assets,
};

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use dd_config::Config;
use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, len, lt, starts_with};
use tokio::sync::watch;

fn test_config(timeout_secs: u64) -> Config {
    let mut config = Config::default();
    config.readiness.timeout_secs = timeout_secs;
    config.readiness.poll_interval_ms = 50;
    config
}

/// Send shutdown once the controller reports `Running`; returns every state seen.
fn shutdown_when_running(
    mut states: watch::Receiver<LifecycleState>,
    trigger: Arc<watch::Sender<bool>>,
) -> thread::JoinHandle<Vec<LifecycleState>> {
    thread::spawn(move || {
        let deadline = Instant::now() + Duration::from_secs(15);
        let mut seen = Vec::new();
        while Instant::now() < deadline {
            let state = *states.borrow_and_update();
            if seen.last() != Some(&state) {
                seen.push(state);
            }
            if state == LifecycleState::Running {
                trigger.send_replace(true);
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        seen
    })
}

#[test]
fn given_failing_native_when_run_then_browser_fallback_and_clean_exit_on_shutdown() {
    // Given
    let assets = setup_assets();
    let browser = RecordingBrowser::default();
    let controller = LifecycleController::new(test_config(10))
        .unwrap()
        .with_native(Box::new(FailingNative))
        .with_browser(Box::new(browser.clone()))
        .with_asset_dir(assets.path())
        .without_signal_handlers();
    let watcher = shutdown_when_running(controller.subscribe(), controller.shutdown_trigger());

    // When
    let result = controller.run();

    // Then
    assert!(result.is_ok(), "{result:?}");
    let seen = watcher.join().unwrap();
    assert_that!(seen.last().copied(), eq(Some(LifecycleState::Running)));
    let opened = browser.opened.lock().unwrap().clone();
    assert_that!(opened, len(eq(1)));
    assert_that!(opened[0].as_str(), starts_with("http://127.0.0.1:"));
}

#[test]
fn given_window_disabled_when_run_then_browser_is_used() {
    // Given
    let assets = setup_assets();
    let mut config = test_config(10);
    config.window.enabled = false;
    let browser = RecordingBrowser::default();
    let controller = LifecycleController::new(config)
        .unwrap()
        .with_browser(Box::new(browser.clone()))
        .with_asset_dir(assets.path())
        .without_signal_handlers();
    let watcher = shutdown_when_running(controller.subscribe(), controller.shutdown_trigger());

    // When
    let result = controller.run();

    // Then
    assert!(result.is_ok(), "{result:?}");
    watcher.join().unwrap();
    assert_that!(browser.opened.lock().unwrap().len(), eq(1));
}

#[test]
fn given_unopenable_browser_when_run_then_still_waits_for_shutdown() {
    // Given
    let assets = setup_assets();
    let browser = RecordingBrowser {
        fail: true,
        ..Default::default()
    };
    let controller = LifecycleController::new(test_config(10))
        .unwrap()
        .without_native()
        .with_browser(Box::new(browser))
        .with_asset_dir(assets.path())
        .without_signal_handlers();
    let watcher = shutdown_when_running(controller.subscribe(), controller.shutdown_trigger());

    // When
    let result = controller.run();

    // Then
    assert!(result.is_ok(), "{result:?}");
    let seen = watcher.join().unwrap();
    assert_that!(seen.last().copied(), eq(Some(LifecycleState::Running)));
}

#[test]
fn given_native_window_closes_when_run_then_exits_without_shutdown_signal() {
    // Given
    let assets = setup_assets();
    let browser = RecordingBrowser::default();
    let controller = LifecycleController::new(test_config(10))
        .unwrap()
        .with_native(Box::new(ClosingNative))
        .with_browser(Box::new(browser.clone()))
        .with_asset_dir(assets.path())
        .without_signal_handlers();
    let states = controller.subscribe();

    // When
    let result = controller.run();

    // Then
    assert!(result.is_ok(), "{result:?}");
    assert_that!(*states.borrow(), eq(LifecycleState::ShuttingDown));
    assert_that!(browser.opened.lock().unwrap().len(), eq(0));
}

#[test]
fn given_server_never_binds_when_run_then_startup_timeout_exit_1() {
    // Given
    let assets = setup_assets();
    let controller = LifecycleController::new(test_config(1))
        .unwrap()
        .with_server(Arc::new(SilentServer))
        .without_native()
        .with_browser(Box::new(RecordingBrowser::default()))
        .with_asset_dir(assets.path())
        .without_signal_handlers();
    let started = Instant::now();

    // When
    let result = controller.run();

    // Then
    let error = result.unwrap_err();
    let is_timeout = matches!(error, LaunchError::ServerStartupTimeout { .. });
    assert_that!(is_timeout, eq(true));
    assert_that!(error.exit_code(), eq(1));
    assert_that!(started.elapsed(), lt(Duration::from_secs(5)));
}

#[test]
fn given_server_fails_at_start_when_run_then_startup_failure_exit_1() {
    // Given
    let assets = setup_assets();
    let controller = LifecycleController::new(test_config(10))
        .unwrap()
        .with_server(Arc::new(FailingServer))
        .without_native()
        .with_browser(Box::new(RecordingBrowser::default()))
        .with_asset_dir(assets.path())
        .without_signal_handlers();

    // When
    let result = controller.run();

    // Then
    let error = result.unwrap_err();
    let is_failure = matches!(error, LaunchError::ServerStartupFailure { .. });
    assert_that!(is_failure, eq(true));
    assert_that!(error.summary(), contains_substring("boom"));
    assert_that!(error.exit_code(), eq(1));
}

#[test]
fn given_server_exits_before_ready_when_run_then_startup_failure() {
    // Given
    let assets = setup_assets();
    let controller = LifecycleController::new(test_config(10))
        .unwrap()
        .with_server(Arc::new(ExitingServer))
        .without_native()
        .with_browser(Box::new(RecordingBrowser::default()))
        .with_asset_dir(assets.path())
        .without_signal_handlers();

    // When
    let result = controller.run();

    // Then
    let error = result.unwrap_err();
    assert_that!(error.summary(), contains_substring("before becoming ready"));
}

#[test]
fn given_missing_assets_when_run_then_assets_not_found() {
    // Given
    let assets = setup_assets();
    let controller = LifecycleController::new(test_config(10))
        .unwrap()
        .with_asset_dir(assets.path().join("missing"))
        .without_signal_handlers();

    // When
    let result = controller.run();

    // Then
    let is_not_found = matches!(result, Err(LaunchError::AssetsNotFound { .. }));
    assert_that!(is_not_found, eq(true));
}

#[test]
fn given_shutdown_before_ready_when_run_then_clean_exit() {
    // Given
    let assets = setup_assets();
    let controller = LifecycleController::new(test_config(30))
        .unwrap()
        .with_server(Arc::new(SilentServer))
        .without_native()
        .with_browser(Box::new(RecordingBrowser::default()))
        .with_asset_dir(assets.path())
        .without_signal_handlers();
    controller.shutdown_trigger().send_replace(true);
    let states = controller.subscribe();
    let started = Instant::now();

    // When
    let result = controller.run();

    // Then
    assert!(result.is_ok(), "{result:?}");
    assert_that!(*states.borrow(), eq(LifecycleState::ShuttingDown));
    assert_that!(started.elapsed(), lt(Duration::from_secs(5)));
}

#[cfg(unix)]
#[test]
fn given_failing_command_server_when_run_then_startup_failure_with_exit_code() {
    // Given
    let assets = setup_assets();
    let mut config = test_config(10);
    config.server.command = vec!["sh".into(), "-c".into(), "exit 4".into()];
    let controller = LifecycleController::new(config)
        .unwrap()
        .without_native()
        .with_browser(Box::new(RecordingBrowser::default()))
        .with_asset_dir(assets.path())
        .without_signal_handlers();

    // When
    let result = controller.run();

    // Then
    let error = result.unwrap_err();
    assert_that!(error.summary(), contains_substring("code 4"));
}
