//! Runs the real `dashdesk` binary and stops it with SIGINT.

#![cfg(unix)]

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};
use tempfile::TempDir;

const STARTUP_TIMEOUT: Duration = Duration::from_secs(30);
const EXIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Start the launcher headless, with no browser on PATH and no user config.
fn spawn_launcher(temp: &TempDir) -> Child {
    let assets = temp.path().join("assets");
    let config = temp.path().join("config");
    let empty_path = temp.path().join("bin");
    std::fs::create_dir_all(&assets).unwrap();
    std::fs::create_dir_all(&config).unwrap();
    std::fs::create_dir_all(&empty_path).unwrap();
    std::fs::write(assets.join("index.html"), "<h1>Penguins</h1>").unwrap();

    Command::new(env!("CARGO_BIN_EXE_dashdesk"))
        .env_clear()
        .env("PATH", &empty_path)
        .env("DD_CONFIG_DIR", &config)
        .env("DD_ASSETS_DIR", &assets)
        .env("DD_WINDOW_ENABLED", "false")
        .env("DD_LOG_COLORED", "false")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

/// Forward stdout lines to a channel so reads can time out.
fn stdout_lines(child: &mut Child) -> mpsc::Receiver<String> {
    let stdout = child.stdout.take().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn wait_for_line(lines: &mpsc::Receiver<String>, needle: &str) -> bool {
    let deadline = Instant::now() + STARTUP_TIMEOUT;
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        match lines.recv_timeout(remaining) {
            Ok(line) if line.contains(needle) => return true,
            Ok(_) => continue,
            Err(_) => return false,
        }
    }
    false
}

fn wait_for_exit(child: &mut Child) -> Option<ExitStatus> {
    let deadline = Instant::now() + EXIT_TIMEOUT;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(50));
    }
    child.kill().ok();
    None
}

#[test]
fn given_running_launcher_when_sigint_then_shuts_down_and_exits_zero() {
    // Given
    let temp = TempDir::new().unwrap();
    let mut child = spawn_launcher(&temp);
    let lines = stdout_lines(&mut child);
    let running = wait_for_line(&lines, "Press Ctrl+C");
    if !running {
        child.kill().ok();
    }
    assert_that!(running, eq(true));

    // When
    let pid = libc::pid_t::try_from(child.id()).unwrap();
    let signalled = unsafe { libc::kill(pid, libc::SIGINT) };
    let status = wait_for_exit(&mut child);

    // Then
    assert_that!(signalled, eq(0));
    let status = status.expect("launcher did not exit after SIGINT");
    assert_that!(status.code(), eq(Some(0)));
    let rest: Vec<String> = lines.try_iter().collect();
    assert_that!(rest.join("\n"), contains_substring("Shutting down..."));
}
