use crate::lifecycle::LaunchError;
use crate::server::ServerError;

use std::panic::Location;

use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, not};

#[test]
fn given_startup_timeout_when_converted_then_launch_timeout() {
    // Given
    let error = ServerError::startup_timeout(30);

    // When
    let launch: LaunchError = error.into();

    // Then
    let is_timeout = matches!(
        launch,
        LaunchError::ServerStartupTimeout {
            timeout_secs: 30,
            ..
        }
    );
    assert_that!(is_timeout, eq(true));
}

#[test]
fn given_no_port_when_converted_then_resource_unavailable() {
    // Given
    let error = ServerError::ResourceUnavailable {
        message: "cannot bind".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let launch: LaunchError = error.into();

    // Then
    let is_unavailable = matches!(launch, LaunchError::ResourceUnavailable { .. });
    assert_that!(is_unavailable, eq(true));
    assert_that!(launch.exit_code(), eq(1));
}

#[test]
fn given_process_exit_when_converted_then_startup_failure_keeps_code() {
    // Given
    let error = ServerError::ProcessExited {
        code: Some(2),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let launch: LaunchError = error.into();

    // Then
    assert_that!(launch.summary(), contains_substring("exited with code 2"));
}

#[test]
fn given_launch_error_when_summary_then_no_source_location() {
    // Given
    let error: LaunchError = ServerError::startup_failure("port in use").into();

    // When
    let summary = error.summary();

    // Then
    assert_that!(summary.as_str(), eq("Server failed to start: port in use"));
    assert_that!(summary, not(contains_substring(file!())));
}

#[test]
fn given_startup_failure_when_converted_then_message_not_prefixed_twice() {
    // Given
    let error = ServerError::startup_failure("boom");

    // When
    let launch: LaunchError = error.into();

    // Then
    assert_that!(launch.summary().as_str(), eq("Server failed to start: boom"));
}

#[test]
fn given_signal_termination_when_summary_then_mentions_signal() {
    // Given
    let error = ServerError::ProcessExited {
        code: None,
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let summary = error.summary();

    // Then
    assert_that!(summary, contains_substring("signal"));
}
