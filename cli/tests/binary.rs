//! Exit status and stream separation of the real `gcurl` binary.

mod common;

use std::io::Write;
use std::process::{Command, Stdio};

use common::start_server;

fn gcurl() -> Command {
    escargot::CargoBuild::new()
        .bin("gcurl")
        .package("gcurl")
        .run()
        .unwrap()
        .command()
}

#[test]
fn no_url_prints_usage_and_exits_1() {
    let output = gcurl().arg("-method").arg("POST").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("You must pass a url to request."), "{stdout}");
    assert!(stdout.contains("--headers"), "{stdout}");
}

#[test]
fn header_echo_goes_to_stdout_only() {
    let addr = start_server();

    let output = gcurl()
        .args(["-headers", r#""X-Test=1""#])
        .arg(format!("http://{addr}/headers"))
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("X-Test: 1\n"), "{stdout}");
    assert!(!stdout.contains("sending request"), "logs leaked to stdout: {stdout}");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("response received"), "{stderr}");
}

#[test]
fn stdin_is_piped_as_body() {
    let addr = start_server();

    let mut child = gcurl()
        .args(["-method", "POST", "-stdin"])
        .arg(format!("http://{addr}/body"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"{\"from\":\"stdin\"}")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, b"{\"from\":\"stdin\"}");
}

#[test]
fn construction_failure_exits_2_with_diagnostic() {
    let output = gcurl().arg("/relative/only").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Could not create request from options"), "{stderr}");
}
