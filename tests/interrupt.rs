//! Interrupt handling of the real binaries: the CORS server stops cleanly,
//! the others keep the default disposition and die from the signal.
#![cfg(unix)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::os::unix::process::ExitStatusExt;
use std::process::{Child, ChildStdout, Command, Stdio};

use tempfile::tempdir;

const SIGINT: i32 = 2;

/// Start a server binary on an ephemeral loopback port inside `dir`
fn spawn_server(binary: &str, dir: &std::path::Path) -> Child {
    Command::new(binary)
        .current_dir(dir)
        .env("DEVSERVE_SERVER__HOST", "127.0.0.1")
        .env("DEVSERVE_SERVER__PORT", "0")
        .env("DEVSERVE_SERVER__ROOT", dir)
        .env("DEVSERVE_LOGGING__ACCESS_LOG", "false")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

/// Read banner lines until the one announcing `prefix`, returning the port
fn wait_for_port(stdout: &mut BufReader<ChildStdout>, prefix: &str) -> u16 {
    let mut line = String::new();
    loop {
        line.clear();
        assert!(stdout.read_line(&mut line).unwrap() > 0, "server exited before its banner");
        if let Some(rest) = line.trim_end().strip_prefix(prefix) {
            return rest.trim_end_matches('/').parse().unwrap();
        }
    }
}

/// One request, so the accept loop (and any signal listener) is known to run
fn fetch_hello(port: u16) -> String {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
    stream.write_all(b"GET /hello.txt HTTP/1.0\r\n\r\n").unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();
    raw
}

fn send_interrupt(child: &Child) {
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn cors_server_stops_cleanly_on_interrupt() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), "hello").unwrap();

    let mut child = spawn_server(env!("CARGO_BIN_EXE_cors-server"), dir.path());
    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let port = wait_for_port(&mut stdout, "Server started at http://localhost:");

    assert!(fetch_hello(port).ends_with("hello"));
    send_interrupt(&child);

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    let status = child.wait().unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(rest.contains("Server stopped"));
}

#[test]
fn plain_server_is_killed_by_interrupt() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), "hello").unwrap();

    let mut child = spawn_server(env!("CARGO_BIN_EXE_plain-server"), dir.path());
    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let port = wait_for_port(&mut stdout, "Server running at http://localhost:");

    assert!(fetch_hello(port).ends_with("hello"));
    send_interrupt(&child);

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    let status = child.wait().unwrap();

    assert_eq!(status.code(), None);
    assert_eq!(status.signal(), Some(SIGINT));
    assert!(!rest.contains("Server stopped"));
}
